use crate::core::artifacts::camera_track_urls;
use crate::core::{CameraTrack, TrackError};
use crate::SharedExhibition;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let win = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_val = JsFuture::from(win.fetch_with_str(url))
        .await
        .map_err(js_err)?;
    let resp: web::Response = resp_val.dyn_into().map_err(js_err)?;
    if !resp.ok() {
        anyhow::bail!("HTTP {} {}", resp.status(), resp.status_text());
    }
    let text_val = JsFuture::from(resp.text().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    text_val
        .as_string()
        .ok_or_else(|| anyhow::anyhow!("response.text() was not a string"))
}

async fn load_track(url: &str) -> Result<CameraTrack, TrackError> {
    match fetch_text(url).await {
        Ok(text) => CameraTrack::from_json(&text),
        Err(e) => Err(TrackError::Unavailable(e.to_string())),
    }
}

/// Fetch every camera track in the background. Each one settles a loader
/// slot whether it parses or not, so a missing file never blocks the intro.
pub fn spawn_track_loads(exhibition: &SharedExhibition) {
    let jobs = camera_track_urls();
    exhibition.borrow_mut().loader_mut().register(jobs.len() as u32);
    log::info!("[assets] loading {} camera tracks", jobs.len());
    for (url, keys) in jobs {
        let ex = exhibition.clone();
        spawn_local(async move {
            let result = load_track(url).await;
            let mut ex = ex.borrow_mut();
            match result {
                Ok(track) => {
                    for key in keys {
                        ex.track_resolved(key, Ok(track.clone()));
                    }
                }
                Err(e) => {
                    let reason = format!("{}: {}", url, e);
                    for key in keys {
                        ex.track_resolved(key, Err(TrackError::Unavailable(reason.clone())));
                    }
                }
            }
            ex.loader_mut().settle();
        });
    }
}
