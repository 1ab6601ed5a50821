//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure you have pico.min.css linked in your main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

/// A responsive grid layout.
#[component]
pub fn Grid(children: Element) -> Element {
    rsx! { div { class: "grid", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

#[derive(Props, PartialEq, Clone)]
pub struct AccordionProps {
    title: String,
    children: Element,
}

/// An accordion for showing/hiding content, using the <details> element.
pub fn Accordion(props: AccordionProps) -> Element {
    rsx! {
        details {
            summary { role: "button", class: "secondary outline", "{props.title}" }
            {props.children}
        }
    }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
    Contrast,
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(default = false)]
    disabled: bool,
}

/// A versatile button component.
pub fn Button(props: ButtonProps) -> Element {
    let mut classes: Vec<&str> = Vec::new();
    match props.button_type {
        ButtonType::Primary => {}
        ButtonType::Secondary => classes.push("secondary"),
        ButtonType::Contrast => classes.push("contrast"),
    }
    if props.outline {
        classes.push("outline");
    }
    let class_str = classes.join(" ");
    rsx! {
        button {
            class: "{class_str}",
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct InputProps {
    label: String,
    name: String,
    #[props(default = "text".to_string())]
    input_type: String,
    #[props(optional)]
    placeholder: Option<String>,
    #[props(default = String::new())]
    value: String,
    #[props(optional)]
    min: Option<String>,
    #[props(default = false)]
    required: bool,
    #[props(default = false)]
    disabled: bool,
    #[props(optional)]
    on_input: Option<EventHandler<FormEvent>>,
}

/// A labeled form input field.
pub fn Input(props: InputProps) -> Element {
    rsx! {
        label {
            "{props.label}"
            input {
                r#type: "{props.input_type}",
                name: "{props.name}",
                placeholder: "{props.placeholder.as_deref().unwrap_or(\"\")}",
                value: "{props.value}",
                min: "{props.min.as_deref().unwrap_or(\"\")}",
                required: props.required,
                disabled: props.disabled,
                oninput: move |evt| {
                    if let Some(handler) = &props.on_input {
                        handler.call(evt);
                    }
                },
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct TextAreaProps {
    label: String,
    name: String,
    #[props(default = String::new())]
    value: String,
    #[props(default = 4)]
    rows: i64,
    #[props(default = false)]
    required: bool,
    #[props(optional)]
    on_input: Option<EventHandler<FormEvent>>,
}

/// A labeled multi-line text field.
pub fn TextArea(props: TextAreaProps) -> Element {
    rsx! {
        label {
            "{props.label}"
            textarea {
                name: "{props.name}",
                rows: props.rows,
                value: "{props.value}",
                required: props.required,
                oninput: move |evt| {
                    if let Some(handler) = &props.on_input {
                        handler.call(evt);
                    }
                },
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct SelectProps {
    label: String,
    name: String,
    /// (value, display) pairs.
    options: Vec<(String, String)>,
    #[props(default = String::new())]
    value: String,
    #[props(optional)]
    placeholder: Option<String>,
    #[props(optional)]
    on_change: Option<EventHandler<FormEvent>>,
}

/// A labeled dropdown.
pub fn Select(props: SelectProps) -> Element {
    rsx! {
        label {
            "{props.label}"
            select {
                name: "{props.name}",
                value: "{props.value}",
                onchange: move |evt| {
                    if let Some(handler) = &props.on_change {
                        handler.call(evt);
                    }
                },
                if let Some(placeholder) = &props.placeholder {
                    option { value: "", selected: props.value.is_empty(), "{placeholder}" }
                }
                for (value, display) in props.options.iter() {
                    option {
                        value: "{value}",
                        selected: *value == props.value,
                        "{display}"
                    }
                }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct CheckboxProps {
    label: String,
    #[props(default = false)]
    checked: bool,
    #[props(optional)]
    on_change: Option<EventHandler<FormEvent>>,
}

/// A labeled checkbox.
pub fn Checkbox(props: CheckboxProps) -> Element {
    rsx! {
        label {
            input {
                r#type: "checkbox",
                checked: props.checked,
                onchange: move |evt| {
                    if let Some(handler) = &props.on_change {
                        handler.call(evt);
                    }
                },
            }
            "{props.label}"
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ModalProps {
    is_open: Signal<bool>,
    title: String,
    children: Element,
}

pub fn Modal(mut props: ModalProps) -> Element {
    rsx! {
        if (props.is_open)() {
            dialog {
                open: true,
                article {
                    header {
                        a {
                            href: "#",
                            "aria-label": "Close",
                            class: "close",
                            onclick: move |_| props.is_open.set(false)
                        }
                        h3 { style: "margin-bottom: 0;", "{props.title}" }
                    }
                    {props.children}
                }
            }
        }
    }
}
