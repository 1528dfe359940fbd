// Mirror of `src/core/` for host-side tests. The main crate is wasm-only,
// so the pure modules are included directly under the same tree shape.
mod core {
    pub mod artifacts {
        include!("../../src/core/artifacts.rs");
    }
    pub mod camera {
        include!("../../src/core/camera.rs");
    }
    pub mod constants {
        include!("../../src/core/constants.rs");
    }
    pub mod controls {
        include!("../../src/core/controls.rs");
    }
    pub mod exhibition {
        include!("../../src/core/exhibition.rs");
    }
    pub mod intro {
        include!("../../src/core/intro.rs");
    }
    pub mod loader {
        include!("../../src/core/loader.rs");
    }
    pub mod orbit {
        include!("../../src/core/orbit.rs");
    }
    pub mod route {
        include!("../../src/core/route.rs");
    }
    pub mod selection {
        include!("../../src/core/selection.rs");
    }
    pub mod track {
        include!("../../src/core/track.rs");
    }
}
