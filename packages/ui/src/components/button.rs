use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Danger,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Success => "btn btn-success",
            ButtonVariant::Danger => "btn btn-danger",
        }
    }
}

/// Styled button. Renders `type="submit"` when `submit` is set so it drives
/// the enclosing form; otherwise it is a plain `type="button"`.
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] submit: bool,
    #[props(default)] class: String,
    #[props(default)] title: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let kind = if submit { "submit" } else { "button" };

    rsx! {
        button {
            r#type: kind,
            class: format!("{} {class}", variant.class()),
            title: title,
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
