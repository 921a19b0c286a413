//! Mock DOM for browser-free testing.
//!
//! An in-memory element registry with just enough surface for the form
//! controller: visibility, disabled state, text content, plus recorders for
//! dispatched events, blocking alerts, and native form submissions.

use std::collections::HashMap;

use crate::config::FormConfig;

/// Represents a DOM element for testing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content (the `value` for the textarea)
    pub text_content: String,
    /// Element attributes
    pub attributes: HashMap<String, String>,
    /// Whether the element is visible (inline `display` toggle)
    pub visible: bool,
    /// Whether the element is disabled (buttons)
    pub disabled: bool,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            visible: true,
            disabled: false,
        }
    }

    /// Creates an element with an ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Starts the element hidden
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Sets visibility
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Sets the disabled state
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(|s| s.as_str())
    }
}

/// DOM events the harness can dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Input event with new value (keystroke/paste into the textarea)
    Input {
        /// The ID of the input element
        element_id: String,
        /// The new value entered
        value: String,
    },
    /// Click event on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
    /// Submit event on a form
    Submit {
        /// The ID of the submitted form
        element_id: String,
    },
}

impl DomEvent {
    /// Creates an input event
    #[must_use]
    pub fn input(element_id: &str, value: &str) -> Self {
        Self::Input {
            element_id: element_id.to_string(),
            value: value.to_string(),
        }
    }

    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates a submit event
    #[must_use]
    pub fn submit(element_id: &str) -> Self {
        Self::Submit {
            element_id: element_id.to_string(),
        }
    }
}

/// Mock DOM for testing the form controller without a browser
#[derive(Debug, Default)]
pub struct MockDom {
    /// Elements by ID
    elements: HashMap<String, DomElement>,
    /// Event history for verification
    event_history: Vec<DomEvent>,
    /// Blocking alert messages, in display order
    alerts: Vec<String>,
    /// Form IDs whose native submission was allowed to proceed
    native_submissions: Vec<String>,
}

impl MockDom {
    /// Creates an empty mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the video-prompt page structure with default identifiers
    #[must_use]
    pub fn video_form() -> Self {
        Self::with_config(&FormConfig::default())
    }

    /// Creates the video-prompt page structure from a configuration
    ///
    /// The loading indicator starts hidden, matching the host page.
    #[must_use]
    pub fn with_config(config: &FormConfig) -> Self {
        let mut dom = Self::new();

        dom.register_element(
            DomElement::new("form")
                .with_id(&config.form_id)
                .with_attr("method", "post"),
        );
        dom.register_element(DomElement::new("div").with_id(&config.loading_id).hidden());
        dom.register_element(
            DomElement::new("button")
                .with_id(&config.submit_id)
                .with_text("Generate"),
        );
        dom.register_element(DomElement::new("textarea").with_id(&config.prompt_id));
        dom.register_element(
            DomElement::new("span")
                .with_id(&config.counter_id)
                .with_text("0"),
        );

        dom
    }

    /// Registers an element for ID lookup
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Removes an element, simulating a host page missing it
    pub fn remove_element(&mut self, id: &str) {
        self.elements.remove(id);
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Gets a mutable element by ID
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// Dispatches an event
    ///
    /// Input events write through to the target element the way the
    /// browser does; everything is recorded for verification.
    pub fn dispatch_event(&mut self, event: DomEvent) {
        self.event_history.push(event.clone());

        if let DomEvent::Input { element_id, value } = &event {
            if let Some(elem) = self.elements.get_mut(element_id) {
                elem.set_text(value);
                elem.attributes.insert("value".to_string(), value.clone());
            }
        }
    }

    /// Shows a blocking alert (the `window.alert` stand-in)
    pub fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    /// Records a native form submission proceeding
    pub fn record_native_submission(&mut self, form_id: &str) {
        self.native_submissions.push(form_id.to_string());
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Clears the event history
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }

    /// Gets alert messages in display order
    #[must_use]
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Gets the form IDs whose native submission proceeded
    #[must_use]
    pub fn native_submissions(&self) -> &[String] {
        &self.native_submissions
    }

    /// Updates element text by ID
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_text(text);
        }
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// Sets element visibility by ID
    pub fn set_visible(&mut self, id: &str, visible: bool) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_visible(visible);
        }
    }

    /// Gets element visibility by ID (absent elements report hidden)
    #[must_use]
    pub fn is_visible(&self, id: &str) -> bool {
        self.elements.get(id).is_some_and(|e| e.visible)
    }

    /// Sets the disabled state by ID
    pub fn set_disabled(&mut self, id: &str, disabled: bool) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_disabled(disabled);
        }
    }

    /// Gets the disabled state by ID (absent elements report enabled)
    #[must_use]
    pub fn is_disabled(&self, id: &str) -> bool {
        self.elements.get(id).is_some_and(|e| e.disabled)
    }
}
