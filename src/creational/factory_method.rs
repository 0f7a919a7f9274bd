//! Factory method: `Dialog::render` is shared, `create_button` is left to each dialog.

use super::{FactoryError, Platform};

pub type ClickHandler = Box<dyn Fn() -> String>;

pub trait Button {
    fn render(&self) -> String;
    fn on_click(&mut self, handler: ClickHandler);
    fn click(&self) -> Option<String>;
}

#[derive(Default)]
pub struct WindowsButton {
    handler: Option<ClickHandler>,
}

#[derive(Default)]
pub struct HtmlButton {
    handler: Option<ClickHandler>,
}

impl Button for WindowsButton {
    fn render(&self) -> String {
        "Windows Button".to_string()
    }

    fn on_click(&mut self, handler: ClickHandler) {
        self.handler = Some(handler);
    }

    fn click(&self) -> Option<String> {
        self.handler
            .as_ref()
            .map(|handler| format!("Windows Button clicked: {}", handler()))
    }
}

impl Button for HtmlButton {
    fn render(&self) -> String {
        "<button>I'm the button</button>".to_string()
    }

    fn on_click(&mut self, handler: ClickHandler) {
        self.handler = Some(handler);
    }

    fn click(&self) -> Option<String> {
        self.handler
            .as_ref()
            .map(|handler| format!("HTML Button clicked: {}", handler()))
    }
}

pub trait Dialog {
    /// The factory method.
    fn create_button(&self) -> Box<dyn Button>;

    fn render(&self) -> Box<dyn Button> {
        let mut button = self.create_button();
        button.on_click(Box::new(|| "dialog closed".to_string()));
        button
    }
}

pub struct WindowsDialog;
pub struct WebDialog;

impl Dialog for WindowsDialog {
    fn create_button(&self) -> Box<dyn Button> {
        Box::<WindowsButton>::default()
    }
}

impl Dialog for WebDialog {
    fn create_button(&self) -> Box<dyn Button> {
        Box::<HtmlButton>::default()
    }
}

pub fn dialog_for(platform: Platform) -> Result<Box<dyn Dialog>, FactoryError> {
    match platform {
        Platform::Windows => Ok(Box::new(WindowsDialog)),
        Platform::Web => Ok(Box::new(WebDialog)),
        Platform::Mac => Err(FactoryError::Unsupported {
            platform,
            pattern: "factory method",
        }),
    }
}

pub fn demo(platform: Platform) -> Result<Vec<String>, FactoryError> {
    let dialog = dialog_for(platform)?;
    let button = dialog.render();
    let mut lines = vec![button.render()];
    lines.extend(button.click());
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_dialog_builds_its_own_button() {
        assert_eq!(WindowsDialog.create_button().render(), "Windows Button");
        assert_eq!(
            WebDialog.create_button().render(),
            "<button>I'm the button</button>"
        );
    }

    #[test]
    fn test_render_wires_click_handler() {
        let plain = WebDialog.create_button();
        assert_eq!(plain.click(), None);

        let rendered = WebDialog.render();
        assert_eq!(
            rendered.click().as_deref(),
            Some("HTML Button clicked: dialog closed")
        );
    }

    #[test]
    fn test_dialog_for_mac_is_unsupported() {
        assert!(dialog_for(Platform::Mac).is_err());
        assert!(dialog_for(Platform::Web).is_ok());
    }

    #[test]
    fn test_demo() {
        let lines = demo(Platform::Windows).unwrap();
        assert_eq!(
            lines,
            vec!["Windows Button", "Windows Button clicked: dialog closed"]
        );
    }
}
