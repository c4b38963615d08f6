use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum BannerVariant {
    #[default]
    Success,
    Error,
}

/// Inline status message above a form or list.
#[component]
pub fn Banner(#[props(default)] variant: BannerVariant, children: Element) -> Element {
    let class = match variant {
        BannerVariant::Success => "banner banner-success",
        BannerVariant::Error => "banner banner-error",
    };

    rsx! {
        div {
            class: class,
            role: "status",
            {children}
        }
    }
}
