use crate::constants::*;
use crate::core::{ArtifactKey, IntroPhase, LoaderStage, ViewState, ARTIFACT_ORDER};
use crate::dom::{set_style, set_text, set_visible};
use web_sys as web;

/// Opacity of the scroll intro: fully visible until the fade band, then
/// linearly out by 100.
#[inline]
pub fn scroll_intro_opacity(progress: f32) -> f32 {
    if progress > SCROLL_FADE_START {
        (1.0 - (progress - SCROLL_FADE_START) / (100.0 - SCROLL_FADE_START)).clamp(0.0, 1.0)
    } else {
        1.0
    }
}

/// Bring the DOM in line with `view`, touching only what changed since `last`.
pub fn sync(document: &web::Document, view: &ViewState, last: &mut Option<ViewState>) {
    if last.as_ref() == Some(view) {
        return;
    }
    let prev = last.take();
    let changed = |f: &dyn Fn(&ViewState) -> bool| prev.as_ref().map_or(true, |p| f(p));

    if changed(&|p| p.loader_stage != view.loader_stage || p.loader_percent != view.loader_percent) {
        sync_loader(document, view);
    }
    if changed(&|p| p.phase != view.phase || p.loader_stage != view.loader_stage) {
        let title_visible =
            view.phase == IntroPhase::Title && view.loader_stage == LoaderStage::Finished;
        set_visible(document, TITLE_OVERLAY_ID, title_visible);
        set_visible(document, SCROLL_INTRO_ID, view.phase == IntroPhase::Scroll);
    }
    if changed(&|p| p.progress != view.progress) {
        sync_scroll(document, view.progress);
    }
    if changed(&|p| p.selected != view.selected || p.narration_playing != view.narration_playing) {
        sync_cinematic(document, view.selected, view.narration_playing);
    }
    if changed(&|p| p.hover_title != view.hover_title) {
        match view.hover_title {
            Some(title) => {
                set_text(document, HOVER_TITLE_ID, title);
                set_visible(document, HOVER_TITLE_ID, true);
            }
            None => set_visible(document, HOVER_TITLE_ID, false),
        }
    }
    if changed(&|p| p.muted != view.muted) {
        if let Some(el) = document.get_element_by_id(VOLUME_BUTTON_ID) {
            _ = el.set_attribute("data-muted", if view.muted { "1" } else { "0" });
        }
    }
    *last = Some(view.clone());
}

fn sync_loader(document: &web::Document, view: &ViewState) {
    let pct = view.loader_percent.floor();
    set_style(document, LOADER_BAR_ID, &format!("width:{}%", pct));
    set_text(document, LOADER_PERCENT_ID, &format!("{}%", pct));
    match view.loader_stage {
        LoaderStage::Loading => set_visible(document, LOADER_ID, true),
        LoaderStage::Fading => {
            if let Some(el) = document.get_element_by_id(LOADER_ID) {
                _ = el.class_list().add_1("fading");
            }
        }
        LoaderStage::Finished => set_visible(document, LOADER_ID, false),
    }
}

fn sync_scroll(document: &web::Document, progress: f32) {
    set_text(document, SCROLL_PERCENT_ID, &format!("{}%", progress.round()));
    set_style(document, SCROLL_BAR_ID, &format!("width:{:.1}%", progress));
    set_style(
        document,
        SCROLL_INTRO_ID,
        &format!("opacity:{:.3}", scroll_intro_opacity(progress)),
    );
}

fn sync_cinematic(document: &web::Document, selected: Option<ArtifactKey>, playing: bool) {
    let Some(key) = selected else {
        set_visible(document, CINEMATIC_OVERLAY_ID, false);
        return;
    };
    let artifact = key.artifact();
    set_text(document, NARRATOR_ID, artifact.narrator);
    set_text(document, ARTIFACT_TITLE_ID, artifact.title);
    set_text(document, DESCRIPTION_ID, artifact.description);
    set_text(document, PLAY_LABEL_ID, if playing { "Pause" } else { "Play" });
    if let Some(el) = document.get_element_by_id(PLAY_BUTTON_ID) {
        _ = el.set_attribute("data-playing", if playing { "1" } else { "0" });
    }
    for k in ARTIFACT_ORDER {
        let selector = format!("#{} [data-artifact=\"{}\"]", ARTIFACT_NAV_ID, k.as_str());
        if let Ok(Some(el)) = document.query_selector(&selector) {
            let cl = el.class_list();
            if k == key {
                _ = cl.add_1("active");
            } else {
                _ = cl.remove_1("active");
            }
        }
    }
    // Model loading is left to whatever viewer the page embeds
    if let Some(el) = document.get_element_by_id(CINEMATIC_OVERLAY_ID) {
        _ = el.set_attribute("data-model", artifact.model_url);
    }
    set_visible(document, CINEMATIC_OVERLAY_ID, true);
}
