//! Browser surface: toasts and dialogs as real DOM nodes under `<body>`.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, HtmlDocument, HtmlElement, HtmlTextAreaElement};

use super::registry::MountRegistry;
use super::{ClipboardDone, ElementId, Surface};
use crate::error::PlatformError;
use crate::ui::dialog::{BUTTON_ROW_STYLE, MESSAGE_STYLE, OVERLAY_STYLE, PANEL_STYLE};
use crate::ui::{DialogChoice, DialogResponder, DialogView, ToastView};

type ClickHandler = Closure<dyn FnMut()>;

pub struct DomSurface {
    document: Document,
    body: HtmlElement,
    /// Mounted nodes with the button handlers they own.
    mounted: MountRegistry<Element, ClickHandler>,
}

fn dom_err(err: JsValue) -> PlatformError {
    PlatformError::Dom(format!("{err:?}"))
}

impl DomSurface {
    /// Bind to the current window's document.
    pub fn new() -> Result<Self, PlatformError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(PlatformError::Unavailable("document"))?;
        let body = document.body().ok_or(PlatformError::Unavailable("document body"))?;
        Ok(Self { document, body, mounted: MountRegistry::new() })
    }

    fn element(&self, tag: &str, style: &str) -> Result<Element, PlatformError> {
        let el = self.document.create_element(tag).map_err(dom_err)?;
        el.set_attribute("style", style).map_err(dom_err)?;
        Ok(el)
    }

    fn button(
        &self,
        class: &str,
        label: &str,
        responder: &DialogResponder,
        choice: DialogChoice,
    ) -> Result<(HtmlElement, ClickHandler), PlatformError> {
        let button: HtmlElement = self
            .document
            .create_element("button")
            .map_err(dom_err)?
            .dyn_into()
            .map_err(|_| PlatformError::Dom("button is not an HtmlElement".into()))?;
        button.set_class_name(class);
        button.set_text_content(Some(label));
        let responder = responder.clone();
        let on_click = ClickHandler::new(move || {
            responder.respond(choice);
        });
        button.set_onclick(Some(on_click.as_ref().unchecked_ref()));
        Ok((button, on_click))
    }

    fn navigator_clipboard() -> Option<web_sys::Clipboard> {
        let navigator = web_sys::window()?.navigator();
        let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard")).ok()?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return None;
        }
        clipboard.dyn_into().ok()
    }
}

impl Surface for DomSurface {
    fn mount_toast(&self, view: &ToastView) -> Result<ElementId, PlatformError> {
        let el = self.element("div", &view.style)?;
        el.set_class_name(&view.class_name);
        el.set_text_content(Some(&view.message));
        self.body.append_child(&el).map_err(dom_err)?;
        Ok(self.mounted.register(el, Vec::new()))
    }

    fn mount_dialog(&self, view: &DialogView, responder: DialogResponder) -> Result<ElementId, PlatformError> {
        let overlay = self.element("div", OVERLAY_STYLE)?;
        let panel = self.element("div", PANEL_STYLE)?;
        let message = self.element("div", MESSAGE_STYLE)?;
        message.set_text_content(Some(&view.message));
        let row = self.element("div", BUTTON_ROW_STYLE)?;

        let (cancel, on_cancel) = self.button("btn btn-secondary", &view.cancel_label, &responder, DialogChoice::Cancel)?;
        let (confirm, on_confirm) = self.button("btn btn-primary", &view.confirm_label, &responder, DialogChoice::Confirm)?;

        row.append_child(&cancel).map_err(dom_err)?;
        row.append_child(&confirm).map_err(dom_err)?;
        panel.append_child(&message).map_err(dom_err)?;
        panel.append_child(&row).map_err(dom_err)?;
        overlay.append_child(&panel).map_err(dom_err)?;
        self.body.append_child(&overlay).map_err(dom_err)?;
        Ok(self.mounted.register(overlay, vec![on_cancel, on_confirm]))
    }

    fn unmount(&self, id: ElementId) {
        if let Some(mounted) = self.mounted.take(id) {
            mounted.element.remove();
            let handlers = mounted.handlers;
            if !handlers.is_empty() {
                // Unmount usually runs inside one of these handlers; release
                // them once the click has returned.
                wasm_bindgen_futures::spawn_local(async move {
                    drop(handlers);
                });
            }
        }
    }

    fn install_styles(&self, id: &str, css: &str) -> Result<bool, PlatformError> {
        if self.document.get_element_by_id(id).is_some() {
            return Ok(false);
        }
        let style = self.document.create_element("style").map_err(dom_err)?;
        style.set_id(id);
        style.set_text_content(Some(css));
        match self.document.head() {
            Some(head) => head.append_child(&style).map_err(dom_err)?,
            None => self.body.append_child(&style).map_err(dom_err)?,
        };
        Ok(true)
    }

    fn has_async_clipboard(&self) -> bool {
        Self::navigator_clipboard().is_some()
    }

    fn write_clipboard_async(&self, text: &str, done: ClipboardDone) {
        let Some(clipboard) = Self::navigator_clipboard() else {
            done(Err(PlatformError::Unavailable("async clipboard")));
            return;
        };
        let promise = clipboard.write_text(text);
        wasm_bindgen_futures::spawn_local(async move {
            let result = wasm_bindgen_futures::JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|e| PlatformError::Clipboard(format!("{e:?}")));
            done(result);
        });
    }

    fn write_clipboard_legacy(&self, text: &str) -> Result<(), PlatformError> {
        let textarea: HtmlTextAreaElement = self
            .element("textarea", "position: fixed; top: 0; left: 0; opacity: 0;")?
            .dyn_into()
            .map_err(|_| PlatformError::Dom("textarea is not an HtmlTextAreaElement".into()))?;
        textarea.set_value(text);
        self.body.append_child(&textarea).map_err(dom_err)?;
        textarea.select();
        let copied = self
            .document
            .dyn_ref::<HtmlDocument>()
            .ok_or(PlatformError::Unavailable("html document"))
            .and_then(|doc| doc.exec_command("copy").map_err(dom_err));
        textarea.remove();
        if copied? {
            Ok(())
        } else {
            Err(PlatformError::Clipboard("copy command was not executed".into()))
        }
    }
}
