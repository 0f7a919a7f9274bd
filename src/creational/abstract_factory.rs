//! Abstract factory: one factory per platform produces a matching family of widgets.

use super::{FactoryError, Platform};

pub trait Button {
    fn paint(&self) -> String;
}

pub trait Checkbox {
    fn paint(&self) -> String;
    fn toggle(&mut self);
}

pub trait GuiFactory {
    fn create_button(&self) -> Box<dyn Button>;
    fn create_checkbox(&self) -> Box<dyn Checkbox>;
}

struct WinButton;
struct MacButton;

#[derive(Default)]
struct WinCheckbox {
    checked: bool,
}

#[derive(Default)]
struct MacCheckbox {
    checked: bool,
}

impl Button for WinButton {
    fn paint(&self) -> String {
        "[ OK ] (Windows button)".to_string()
    }
}

impl Button for MacButton {
    fn paint(&self) -> String {
        "( OK ) (macOS button)".to_string()
    }
}

impl Checkbox for WinCheckbox {
    fn paint(&self) -> String {
        let mark = if self.checked { "X" } else { " " };
        format!("[{mark}] (Windows checkbox)")
    }

    fn toggle(&mut self) {
        self.checked = !self.checked;
    }
}

impl Checkbox for MacCheckbox {
    fn paint(&self) -> String {
        let mark = if self.checked { "✓" } else { " " };
        format!("({mark}) (macOS checkbox)")
    }

    fn toggle(&mut self) {
        self.checked = !self.checked;
    }
}

pub struct WinFactory;
pub struct MacFactory;

impl GuiFactory for WinFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WinButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(WinCheckbox::default())
    }
}

impl GuiFactory for MacFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(MacButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(MacCheckbox::default())
    }
}

/// Pick the widget family for a platform. The web has no native widgets.
pub fn factory_for(platform: Platform) -> Result<Box<dyn GuiFactory>, FactoryError> {
    match platform {
        Platform::Windows => Ok(Box::new(WinFactory)),
        Platform::Mac => Ok(Box::new(MacFactory)),
        Platform::Web => Err(FactoryError::Unsupported {
            platform,
            pattern: "abstract factory",
        }),
    }
}

pub struct Application {
    button: Box<dyn Button>,
    checkbox: Box<dyn Checkbox>,
}

impl Application {
    pub fn new(factory: &dyn GuiFactory) -> Self {
        Self {
            button: factory.create_button(),
            checkbox: factory.create_checkbox(),
        }
    }

    pub fn toggle_checkbox(&mut self) {
        self.checkbox.toggle();
    }

    pub fn paint(&self) -> Vec<String> {
        vec![self.button.paint(), self.checkbox.paint()]
    }
}

pub fn demo(platform: Platform) -> Result<Vec<String>, FactoryError> {
    let factory = factory_for(platform)?;
    let mut app = Application::new(factory.as_ref());
    let mut lines = app.paint();
    app.toggle_checkbox();
    lines.extend(app.paint().into_iter().skip(1));
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_family() {
        let app = Application::new(&WinFactory);
        let painted = app.paint();
        assert!(painted.iter().all(|p| p.contains("Windows")));
    }

    #[test]
    fn test_mac_family() {
        let app = Application::new(&MacFactory);
        assert!(app.paint().iter().all(|p| p.contains("macOS")));
    }

    #[test]
    fn test_checkbox_toggle() {
        let mut app = Application::new(&WinFactory);
        app.toggle_checkbox();
        assert_eq!(app.paint()[1], "[X] (Windows checkbox)");
        app.toggle_checkbox();
        assert_eq!(app.paint()[1], "[ ] (Windows checkbox)");
    }

    #[test]
    fn test_factory_for_platforms() {
        assert!(factory_for(Platform::Mac).is_ok());
        assert!(matches!(
            factory_for(Platform::Web),
            Err(FactoryError::Unsupported { platform: Platform::Web, .. })
        ));
    }

    #[test]
    fn test_demo() {
        let lines = demo(Platform::Mac).unwrap();
        assert_eq!(lines.len(), 3);
        assert!(lines[2].contains('✓'));
    }
}
