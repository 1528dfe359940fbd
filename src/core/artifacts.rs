use std::fmt;

/// Identity of one of the five exhibited artifacts.
///
/// The set is closed: artifacts are defined at startup and never created or
/// destroyed while the exhibition runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArtifactKey {
    Armor,
    Rifle,
    Boot,
    Mask,
    Letter,
}

/// Ring order. Index in this array is the artifact's slot on the ring and
/// drives next/prev adjacency.
pub const ARTIFACT_ORDER: [ArtifactKey; 5] = [
    ArtifactKey::Armor,
    ArtifactKey::Rifle,
    ArtifactKey::Boot,
    ArtifactKey::Mask,
    ArtifactKey::Letter,
];

pub const ARTIFACT_COUNT: usize = ARTIFACT_ORDER.len();

#[derive(Clone, Debug)]
pub struct Artifact {
    pub key: ArtifactKey,
    pub title: &'static str,
    pub narrator: &'static str,
    pub description: &'static str,
    pub model_url: &'static str,
    pub camera_url: &'static str,
    pub audio_url: &'static str,
    pub color_hex: &'static str,
    pub scale: f32,
    /// Bobbing speed of the floating motion.
    pub float_speed: f32,
}

static ARMOR: Artifact = Artifact {
    key: ArtifactKey::Armor,
    title: "The Armor",
    narrator: "WESLEY ENOCH",
    description: "Plate mail, dented and worn. A failed protection.",
    model_url: "/assets/helmet.high.glb",
    camera_url: "/assets/camera-animation__armour.json",
    audio_url: "/assets/act3-armour.mp3",
    color_hex: "#c0c0c0",
    scale: 1.2,
    float_speed: 1.5,
};

static RIFLE: Artifact = Artifact {
    key: ArtifactKey::Rifle,
    title: "The Rifle",
    narrator: "UNCLE JACK CHARLES",
    description: "A standard issue rifle. Heavy with the weight of conflict.",
    model_url: "/assets/rifle.high.glb",
    camera_url: "/assets/camera-animation__rifle.json",
    audio_url: "/assets/act3-rifle.mp3",
    color_hex: "#a1cfee",
    scale: 1.0,
    float_speed: 1.2,
};

static BOOT: Artifact = Artifact {
    key: ArtifactKey::Boot,
    title: "The Boot",
    narrator: "UNCLE JACK CHARLES",
    description: "This boot was found in the debris... a remnant of a journey taken long ago.",
    model_url: "/assets/boot.high.glb",
    camera_url: "/assets/camera-animation__boot.json",
    audio_url: "/assets/act3-boot.mp3",
    color_hex: "#eecfa1",
    scale: 1.0,
    float_speed: 1.8,
};

static MASK: Artifact = Artifact {
    key: ArtifactKey::Mask,
    title: "The Death Mask",
    narrator: "WESLEY ENOCH",
    description: "A visage of the departed. Silent and observing.",
    model_url: "/assets/deathmask.high.glb",
    camera_url: "/assets/camera-animation__mask.json",
    audio_url: "/assets/act3-mask.mp3",
    color_hex: "#ffaaaa",
    scale: 0.8,
    float_speed: 2.0,
};

// The letter reuses the boot's camera track.
static LETTER: Artifact = Artifact {
    key: ArtifactKey::Letter,
    title: "The Letter",
    narrator: "WESLEY ENOCH",
    description: "Words sent home, never to be read again.",
    model_url: "/assets/letter.viewer.glb",
    camera_url: "/assets/camera-animation__boot.json",
    audio_url: "/assets/act3-letter.mp3",
    color_hex: "#ffffff",
    scale: 0.5,
    float_speed: 1.0,
};

impl ArtifactKey {
    /// Address segment and DOM identifier for this artifact.
    pub fn as_str(self) -> &'static str {
        match self {
            ArtifactKey::Armor => "armor",
            ArtifactKey::Rifle => "rifle",
            ArtifactKey::Boot => "boot",
            ArtifactKey::Mask => "mask",
            ArtifactKey::Letter => "letter",
        }
    }

    /// Exact, case-sensitive match against the address segments.
    pub fn parse(segment: &str) -> Option<Self> {
        ARTIFACT_ORDER.iter().copied().find(|k| k.as_str() == segment)
    }

    pub fn artifact(self) -> &'static Artifact {
        match self {
            ArtifactKey::Armor => &ARMOR,
            ArtifactKey::Rifle => &RIFLE,
            ArtifactKey::Boot => &BOOT,
            ArtifactKey::Mask => &MASK,
            ArtifactKey::Letter => &LETTER,
        }
    }

    pub fn position(self) -> usize {
        position_of(self)
    }

    pub fn next(self) -> Self {
        next(self)
    }

    pub fn prev(self) -> Self {
        prev(self)
    }
}

impl fmt::Display for ArtifactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[inline]
pub fn position_of(key: ArtifactKey) -> usize {
    // Every key is in ARTIFACT_ORDER, so the fallback is unreachable in practice.
    ARTIFACT_ORDER.iter().position(|k| *k == key).unwrap_or(0)
}

#[inline]
pub fn next(key: ArtifactKey) -> ArtifactKey {
    ARTIFACT_ORDER[(position_of(key) + 1) % ARTIFACT_COUNT]
}

#[inline]
pub fn prev(key: ArtifactKey) -> ArtifactKey {
    ARTIFACT_ORDER[(position_of(key) + ARTIFACT_COUNT - 1) % ARTIFACT_COUNT]
}

/// Decode `#rrggbb` into linear-ish 0..1 RGB. Malformed input yields white.
pub fn parse_hex_color(hex: &str) -> [f32; 3] {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 {
        return [1.0, 1.0, 1.0];
    }
    let channel = |i: usize| {
        digits
            .get(i..i + 2)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .map(|v| v as f32 / 255.0)
    };
    match (channel(0), channel(2), channel(4)) {
        (Some(r), Some(g), Some(b)) => [r, g, b],
        _ => [1.0, 1.0, 1.0],
    }
}

/// Distinct camera track URLs paired with every artifact that uses them.
pub fn camera_track_urls() -> Vec<(&'static str, Vec<ArtifactKey>)> {
    let mut out: Vec<(&'static str, Vec<ArtifactKey>)> = Vec::new();
    for key in ARTIFACT_ORDER {
        let url = key.artifact().camera_url;
        match out.iter_mut().find(|(u, _)| *u == url) {
            Some((_, keys)) => keys.push(key),
            None => out.push((url, vec![key])),
        }
    }
    out
}
