/// Event names understood by the batch `on`/`off`/`trigger` helpers. Anything not listed can be
/// passed through [`EventType::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventType {
    Click,
    DblClick,
    MouseDown,
    MouseUp,
    MouseMove,
    MouseOver,
    MouseOut,
    MouseEnter,
    MouseLeave,
    ContextMenu,
    Show,
    Load,
    DomContentLoaded,
    BeforeUnload,
    Input,
    Change,
    Submit,
    KeyDown,
    KeyUp,
    Focus,
    Blur,
    Custom(String),
}

impl EventType {
    /// The name used when registering JS listeners.
    pub fn name(&self) -> &str {
        use EventType::*;
        match self {
            Click => "click",
            DblClick => "dblclick",
            MouseDown => "mousedown",
            MouseUp => "mouseup",
            MouseMove => "mousemove",
            MouseOver => "mouseover",
            MouseOut => "mouseout",
            MouseEnter => "mouseenter",
            MouseLeave => "mouseleave",
            ContextMenu => "contextmenu",
            Show => "show",
            Load => "load",
            DomContentLoaded => "DOMContentLoaded",
            BeforeUnload => "beforeunload",
            Input => "input",
            Change => "change",
            Submit => "submit",
            KeyDown => "keydown",
            KeyUp => "keyup",
            Focus => "focus",
            Blur => "blur",
            Custom(name) => name,
        }
    }

    /// Whether a synthetic event of this type should be created as a `MouseEvent`. Matches any
    /// name mentioning `click` or `mouse`, plus `contextmenu` and `show`.
    pub fn is_mouse(&self) -> bool {
        let name = self.name();

        name.contains("click") || name.contains("mouse") || name == "contextmenu" || name == "show"
    }
}

impl From<&str> for EventType {
    fn from(name: &str) -> Self {
        use EventType::*;
        match name {
            "click" => Click,
            "dblclick" => DblClick,
            "mousedown" => MouseDown,
            "mouseup" => MouseUp,
            "mousemove" => MouseMove,
            "mouseover" => MouseOver,
            "mouseout" => MouseOut,
            "mouseenter" => MouseEnter,
            "mouseleave" => MouseLeave,
            "contextmenu" => ContextMenu,
            "show" => Show,
            "load" => Load,
            "DOMContentLoaded" => DomContentLoaded,
            "beforeunload" => BeforeUnload,
            "input" => Input,
            "change" => Change,
            "submit" => Submit,
            "keydown" => KeyDown,
            "keyup" => KeyUp,
            "focus" => Focus,
            "blur" => Blur,
            other => Custom(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_str() {
        for name in ["click", "DOMContentLoaded", "beforeunload", "keyup"] {
            assert_eq!(EventType::from(name).name(), name);
        }

        assert_eq!(
            EventType::from("my-event"),
            EventType::Custom("my-event".into())
        );
    }

    #[test]
    fn mouse_detection() {
        assert!(EventType::Click.is_mouse());
        assert!(EventType::DblClick.is_mouse());
        assert!(EventType::MouseLeave.is_mouse());
        assert!(EventType::ContextMenu.is_mouse());
        assert!(EventType::Show.is_mouse());
        assert!(EventType::from("auxclick").is_mouse());

        assert!(!EventType::KeyDown.is_mouse());
        assert!(!EventType::Load.is_mouse());
        assert!(!EventType::from("showing").is_mouse());
    }
}
