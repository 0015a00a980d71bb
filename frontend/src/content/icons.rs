use yew::prelude::*;

/// Every icon the site renders. Content refers to icons by key and the key is
/// looked up here, so unknown keys simply render nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconId {
    ShieldCheck,
    KeyRound,
    Gem,
    Crown,
    Target,
    Eye,
    Plane,
    Car,
    UserShield,
    UserTie,
    Utensils,
    Palette,
    Briefcase,
    Stethoscope,
    Gift,
    Check,
    Star,
    Quote,
    Close,
    Menu,
    Globe,
    Envelope,
    Phone,
    MapMarker,
    Instagram,
    Spinner,
    ArrowRight,
    Calendar,
    Sparkles,
}

impl IconId {
    pub fn from_key(key: &str) -> Option<IconId> {
        let icon = match key {
            "shield_check" => IconId::ShieldCheck,
            "key_round" => IconId::KeyRound,
            "gem" => IconId::Gem,
            "crown" => IconId::Crown,
            "target" => IconId::Target,
            "eye" => IconId::Eye,
            "plane" => IconId::Plane,
            "car" => IconId::Car,
            "user_shield" => IconId::UserShield,
            "user_tie" => IconId::UserTie,
            "utensils" => IconId::Utensils,
            "palette" => IconId::Palette,
            "briefcase" => IconId::Briefcase,
            "stethoscope" => IconId::Stethoscope,
            "gift" => IconId::Gift,
            "check" => IconId::Check,
            "star" => IconId::Star,
            "sparkles" => IconId::Sparkles,
            _ => return None,
        };
        Some(icon)
    }

    /// Font Awesome classes for the icon.
    pub fn class(&self) -> &'static str {
        match self {
            IconId::ShieldCheck => "fa-solid fa-shield-halved",
            IconId::KeyRound => "fa-solid fa-key",
            IconId::Gem => "fa-solid fa-gem",
            IconId::Crown => "fa-solid fa-crown",
            IconId::Target => "fa-solid fa-bullseye",
            IconId::Eye => "fa-solid fa-eye",
            IconId::Plane => "fa-solid fa-plane-arrival",
            IconId::Car => "fa-solid fa-car",
            IconId::UserShield => "fa-solid fa-user-shield",
            IconId::UserTie => "fa-solid fa-user-tie",
            IconId::Utensils => "fa-solid fa-utensils",
            IconId::Palette => "fa-solid fa-palette",
            IconId::Briefcase => "fa-solid fa-briefcase",
            IconId::Stethoscope => "fa-solid fa-stethoscope",
            IconId::Gift => "fa-solid fa-gift",
            IconId::Check => "fa-solid fa-circle-check",
            IconId::Star => "fa-solid fa-star",
            IconId::Quote => "fa-solid fa-quote-left",
            IconId::Close => "fa-solid fa-xmark",
            IconId::Menu => "fa-solid fa-bars",
            IconId::Globe => "fa-solid fa-globe",
            IconId::Envelope => "fa-solid fa-envelope",
            IconId::Phone => "fa-solid fa-phone",
            IconId::MapMarker => "fa-solid fa-location-dot",
            IconId::Instagram => "fa-brands fa-instagram",
            IconId::Spinner => "fa-solid fa-spinner fa-spin",
            IconId::ArrowRight => "fa-solid fa-arrow-right",
            IconId::Calendar => "fa-regular fa-calendar",
            IconId::Sparkles => "fa-solid fa-wand-magic-sparkles",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub icon: IconId,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component]
pub fn Icon(props: &IconProps) -> Html {
    html! {
        <i class={classes!(props.icon.class(), props.class.clone())} aria-hidden="true"></i>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_keys_resolve_to_icons() {
        assert_eq!(IconId::from_key("shield_check"), Some(IconId::ShieldCheck));
        assert_eq!(IconId::from_key("crown"), Some(IconId::Crown));
        assert_eq!(IconId::from_key("ShieldCheck"), None);
        assert_eq!(IconId::from_key(""), None);
    }

    #[test]
    fn locale_icon_keys_are_known() {
        let tr = crate::i18n::Translator::new(crate::i18n::Locale::En);
        for list in ["why_choose_us.points", "about_page.pillars"] {
            for i in 0..tr.len(list) {
                let key = tr.t(&format!("{}.{}.icon", list, i));
                assert!(IconId::from_key(&key).is_some(), "unknown icon key {}", key);
            }
        }
    }
}
