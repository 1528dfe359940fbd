use crate::constants::*;
use crate::core::{ArtifactKey, Effect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A media element routed into the WebAudio graph through its own gain.
struct Channel {
    element: web::HtmlAudioElement,
    _source: web::MediaElementAudioSourceNode,
    _gain: web::GainNode,
}

/// Ambient loop, UI one-shots and narration, all feeding one master gain that
/// implements mute. Narration is a single channel whose source is swapped per
/// artifact, so the graph does not grow with each selection.
pub struct AudioBank {
    ctx: web::AudioContext,
    master: web::GainNode,
    ambient: Channel,
    ui_hover: Channel,
    ui_click: Channel,
    narration: Channel,
    narrating: Option<ArtifactKey>,
    on_narration_end: Option<Closure<dyn FnMut()>>,
}

fn create_gain(audio_ctx: &web::AudioContext, value: f32, label: &str) -> anyhow::Result<web::GainNode> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("{} GainNode error: {:?}", label, e);
            Err(anyhow::anyhow!("{} GainNode error: {:?}", label, e))
        }
    }
}

fn create_channel(
    audio_ctx: &web::AudioContext,
    master: &web::GainNode,
    url: Option<&str>,
    volume: f32,
    looping: bool,
    label: &str,
) -> anyhow::Result<Channel> {
    let element = match url {
        Some(url) => web::HtmlAudioElement::new_with_src(url),
        None => web::HtmlAudioElement::new(),
    }
    .map_err(|e| anyhow::anyhow!("{} audio element error: {:?}", label, e))?;
    element.set_loop(looping);
    element.set_preload("auto");
    let source = audio_ctx
        .create_media_element_source(&element)
        .map_err(|e| anyhow::anyhow!("{} media source error: {:?}", label, e))?;
    let gain = create_gain(audio_ctx, volume, label)?;
    _ = source.connect_with_audio_node(&gain);
    _ = gain.connect_with_audio_node(master);
    Ok(Channel {
        element,
        _source: source,
        _gain: gain,
    })
}

impl AudioBank {
    /// Build the graph muted; the first unmute happens on a user gesture.
    pub fn new() -> anyhow::Result<Self> {
        let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let master = create_gain(&ctx, 0.0, "Master")?;
        _ = master.connect_with_audio_node(&ctx.destination());
        let ambient = create_channel(&ctx, &master, Some(AMBIENT_URL), AMBIENT_VOLUME, true, "Ambient")?;
        let ui_hover = create_channel(&ctx, &master, Some(UI_HOVER_URL), UI_HOVER_VOLUME, false, "UI hover")?;
        let ui_click = create_channel(&ctx, &master, Some(UI_CLICK_URL), UI_CLICK_VOLUME, false, "UI click")?;
        let narration = create_channel(&ctx, &master, None, NARRATION_VOLUME, false, "Narration")?;
        Ok(Self {
            ctx,
            master,
            ambient,
            ui_hover,
            ui_click,
            narration,
            narrating: None,
            on_narration_end: None,
        })
    }

    /// Called when narration finishes by itself. Replaces any earlier handler.
    pub fn set_narration_end_handler(&mut self, handler: impl Fn() + 'static) {
        let element = &self.narration.element;
        if let Some(old) = self.on_narration_end.take() {
            _ = element.remove_event_listener_with_callback("ended", old.as_ref().unchecked_ref());
        }
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        _ = element.add_event_listener_with_callback("ended", closure.as_ref().unchecked_ref());
        self.on_narration_end = Some(closure);
    }

    pub fn apply(&mut self, effects: &[Effect]) {
        for effect in effects {
            match *effect {
                Effect::SetMuted(muted) => self.set_muted(muted),
                Effect::StartNarration(key) => self.start_narration(key),
                Effect::StopNarration => self.stop_narration(),
                Effect::PauseNarration => {
                    if self.narrating.is_some() {
                        _ = self.narration.element.pause();
                    }
                }
                Effect::ResumeNarration => {
                    if self.narrating.is_some() {
                        _ = self.narration.element.play();
                    }
                }
                Effect::PhaseChanged(_) => {}
            }
        }
    }

    pub fn ui_hover(&self) {
        restart(&self.ui_hover.element);
    }

    pub fn ui_click(&self) {
        restart(&self.ui_click.element);
    }

    fn set_muted(&mut self, muted: bool) {
        _ = self.ctx.resume();
        self.master.gain().set_value(if muted { 0.0 } else { 1.0 });
        if muted {
            _ = self.ambient.element.pause();
        } else if self.ambient.element.paused() {
            _ = self.ambient.element.play();
        }
        log::info!("[audio] muted={}", muted);
    }

    fn start_narration(&mut self, key: ArtifactKey) {
        self.stop_narration();
        let element = &self.narration.element;
        element.set_src(key.artifact().audio_url);
        element.set_current_time(0.0);
        _ = element.play();
        log::info!("[audio] narration {}", key);
        self.narrating = Some(key);
    }

    fn stop_narration(&mut self) {
        if let Some(key) = self.narrating.take() {
            let element = &self.narration.element;
            _ = element.pause();
            // Drop the buffered clip; the element and its nodes stay wired for reuse
            _ = element.remove_attribute("src");
            element.load();
            log::info!("[audio] narration {} stopped", key);
        }
    }
}

fn restart(element: &web::HtmlAudioElement) {
    element.set_current_time(0.0);
    _ = element.play();
}
