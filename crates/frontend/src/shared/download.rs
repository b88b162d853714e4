/// File download boundary: triggers a browser "save as" for a remote file
use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

/// Side-effecting "save this URL as a file" operation
pub trait FileSaver {
    fn save(&self, url: &str, filename: &str) -> Result<(), String>;
}

/// Saves files through a temporary `<a download>` element
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserFileSaver;

impl FileSaver for BrowserFileSaver {
    fn save(&self, url: &str, filename: &str) -> Result<(), String> {
        download_url(url, filename)
    }
}

/// Initiates a download of `url` through the browser
fn download_url(url: &str, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(url);
    anchor.set_download(filename);
    anchor.set_rel("noopener");
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    // Attach, click, detach
    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Ok(())
}

/// Save `url` under `filename`, logging the outcome
pub fn save_model<S: FileSaver + ?Sized>(saver: &S, url: &str, filename: &str) {
    match saver.save(url, filename) {
        Ok(()) => log::info!("download started: {} as {}", url, filename),
        Err(e) => log::warn!("download of {} failed: {}", url, e),
    }
}
