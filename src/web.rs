//! Browser entry point: binds the page elements, `localStorage` and the
//! three analysis forms when the module is loaded.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    console, Document, Element, Event, HtmlImageElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, Storage, Window,
};

use crate::client::AiClient;
use crate::config::Config;
use crate::error::{PitwallError, Result};
use crate::forms::{AiForm, FormController, QaForm, SentimentForm, SubmitOutcome, SummaryForm};
use crate::preference::{PreferenceBridge, TeamBindings, SAVED_ACK};
use crate::store::KeyValueStore;
use crate::types::TeamLogos;
use crate::view::{ImageTarget, Input, InputSource, SelectControl, Text, TextTarget, Toggle};

/// `localStorage` of the page's origin.
pub struct WebStorage(Storage);

impl WebStorage {
    pub fn local(window: &Window) -> Result<Self> {
        window
            .local_storage()
            .ok()
            .flatten()
            .map(WebStorage)
            .ok_or_else(|| PitwallError::StoreRead("localStorage is unavailable".into()))
    }
}

impl KeyValueStore for WebStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.0
            .set_item(key, value)
            .map_err(|e| PitwallError::StoreWrite(format!("{e:?}")))
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.0
            .remove_item(key)
            .map_err(|e| PitwallError::StoreWrite(format!("{e:?}")))
    }
}

impl TextTarget for Element {
    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn clear_empty_state(&self) {
        let _ = self.class_list().remove_1("empty-state");
    }
}

impl Toggle for Element {
    fn set_hidden(&self, hidden: bool) {
        let classes = self.class_list();
        let _ = if hidden {
            classes.add_1("hidden")
        } else {
            classes.remove_1("hidden")
        };
    }
}

impl ImageTarget for HtmlImageElement {
    fn show(&self, src: &str) {
        self.set_src(src);
        let _ = self.style().set_property("display", "block");
    }
}

impl SelectControl for HtmlSelectElement {
    fn value(&self) -> String {
        HtmlSelectElement::value(self)
    }

    fn selected_label(&self) -> String {
        u32::try_from(self.selected_index())
            .ok()
            .and_then(|index| self.item(index))
            .and_then(|option| option.text_content())
            .unwrap_or_default()
    }

    fn set_value(&self, value: &str) {
        HtmlSelectElement::set_value(self, value);
    }
}

/// Any element with a `value`.
enum Field {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
    Select(HtmlSelectElement),
}

impl Field {
    fn from_element(element: Element) -> Option<Self> {
        let element = match element.dyn_into::<HtmlTextAreaElement>() {
            Ok(area) => return Some(Field::TextArea(area)),
            Err(element) => element,
        };
        let element = match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => return Some(Field::Input(input)),
            Err(element) => element,
        };
        element.dyn_into::<HtmlSelectElement>().ok().map(Field::Select)
    }
}

impl InputSource for Field {
    fn value(&self) -> String {
        match self {
            Field::Input(input) => input.value(),
            Field::TextArea(area) => area.value(),
            Field::Select(select) => select.value(),
        }
    }
}

struct Page {
    window: Window,
    document: Document,
}

impl Page {
    fn current() -> std::result::Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        Ok(Self { window, document })
    }

    /// Defaults, with `<body data-api-base="...">` overriding the backend.
    fn config(&self) -> Config {
        let base = self
            .document
            .body()
            .and_then(|body| body.get_attribute("data-api-base"));
        Config::default().with_api_base(base)
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn text(&self, id: &str) -> Option<Text> {
        self.element(id).map(|el| Rc::new(el) as Text)
    }

    fn field(&self, id: &str) -> Option<Input> {
        self.element(id)
            .and_then(Field::from_element)
            .map(|field| Rc::new(field) as Input)
    }

    fn team_bindings(&self) -> TeamBindings {
        TeamBindings {
            name: self.text("favorite-team-name"),
            logo: self
                .element("user-team-logo")
                .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
                .map(|img| Rc::new(img) as Rc<dyn ImageTarget>),
            select: self
                .element("favorite-team-select")
                .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
                .map(|select| Rc::new(select) as Rc<dyn SelectControl>),
        }
    }

    fn bridge(&self, config: &Config) -> Result<PreferenceBridge<WebStorage>> {
        Ok(PreferenceBridge::new(
            WebStorage::local(&self.window)?,
            config.storage.clone(),
            TeamLogos::new(&config.assets.logo_dir),
        ))
    }

    fn sentiment_form(&self) -> Option<SentimentForm> {
        Some(SentimentForm {
            text: self.field("sentiment-text")?,
            language: self.field("sentiment-language"),
            result: self.text("sentiment-result")?,
            status: self.text("sentiment-status"),
            details: self
                .element("sentiment-extra")
                .map(|el| Rc::new(el) as Rc<dyn Toggle>),
            badge: self.text("sentiment-label-badge"),
            score: self.text("sentiment-score-value"),
            explanation: self.text("sentiment-explanation"),
        })
    }

    fn summary_form(&self) -> Option<SummaryForm> {
        Some(SummaryForm::new(
            self.field("summary-text")?,
            self.text("summary-result")?,
        ))
    }

    fn qa_form(&self) -> Option<QaForm> {
        let mut form = QaForm::new(self.field("qa-text")?, self.text("qa-result")?);
        form.context = self.field("qa-context");
        Some(form)
    }
}

fn to_js(err: PitwallError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Route the form element's submit events to the controller.
fn bind<F>(
    form_element: Element,
    controller: FormController<F, AiClient>,
) -> std::result::Result<(), JsValue>
where
    F: AiForm + 'static,
{
    let controller = Rc::new(controller);
    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        let controller = controller.clone();
        spawn_local(async move {
            if let SubmitOutcome::Failed(err) = controller.submit().await {
                console::error_1(&JsValue::from_str(&err.to_string()));
            }
        });
    });
    form_element.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();
    Ok(())
}

/// Restore the saved team, then bind whichever forms the page has.
///
/// The two halves share nothing: a page whose storage is blocked still gets
/// working forms.
fn mount_page<S: KeyValueStore>(
    page: &Page,
    bridge: Result<PreferenceBridge<S>>,
) -> std::result::Result<(), JsValue> {
    let config = page.config();

    match bridge {
        Ok(bridge) => {
            bridge.load(&page.team_bindings());
        }
        Err(e) => console::error_1(&to_js(e)),
    }

    let client = Rc::new(AiClient::new(config.api.clone()));

    if let (Some(el), Some(form)) = (page.element("sentiment-form"), page.sentiment_form()) {
        bind(el, FormController::new(form, client.clone(), &config.api))?;
    }
    if let (Some(el), Some(form)) = (page.element("summary-form"), page.summary_form()) {
        bind(el, FormController::new(form, client.clone(), &config.api))?;
    }
    if let (Some(el), Some(form)) = (page.element("qa-form"), page.qa_form()) {
        bind(el, FormController::new(form, client, &config.api))?;
    }

    Ok(())
}

fn mount() -> std::result::Result<(), JsValue> {
    let page = Page::current()?;
    let bridge = page.bridge(&page.config());
    mount_page(&page, bridge)
}

/// Route `log` records, and through them `tracing` events, to the console.
fn init_logging() {
    // Already installed on a second start
    let _ = console_log::init_with_level(log::Level::Debug);
}

#[wasm_bindgen(start)]
pub fn start() -> std::result::Result<(), JsValue> {
    console_error_panic_hook::set_once();
    init_logging();

    let page = Page::current()?;
    if page.document.ready_state() != "loading" {
        return mount();
    }

    let on_ready = Closure::<dyn FnMut()>::new(|| {
        if let Err(e) = mount() {
            console::error_1(&e);
        }
    });
    page.document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
    on_ready.forget();
    Ok(())
}

fn save_selection(page: &Page) -> Result<Option<(String, String)>> {
    let config = page.config();
    page.bridge(&config)?.save(&page.team_bindings())
}

/// Called from the profile page's save button.
#[wasm_bindgen(js_name = saveProfileSettings)]
pub fn save_profile_settings() -> std::result::Result<(), JsValue> {
    let page = Page::current()?;

    if save_selection(&page).map_err(to_js)?.is_some() {
        page.window.alert_with_message(SAVED_ACK)?;
    }
    Ok(())
}
