use super::types::Palette;

/// The widget toolkit side of theming.
///
/// Implementations push the palette to the application and to every live
/// widget, and replace the application stylesheet.
pub trait ThemeHost {
    /// The live application palette.
    fn palette(&self) -> Palette;

    fn set_palette(&mut self, palette: Palette);

    fn set_stylesheet(&mut self, stylesheet: &str);
}

/// A host without widgets; it just remembers what it was told.
#[derive(Debug, Clone, Default)]
pub struct HeadlessHost {
    palette: Palette,
    stylesheet: Option<String>,
    palette_applications: usize,
}

impl HeadlessHost {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            stylesheet: None,
            palette_applications: 0,
        }
    }

    pub fn stylesheet(&self) -> Option<&str> {
        self.stylesheet.as_deref()
    }

    /// How many times a palette has been pushed.
    pub fn palette_applications(&self) -> usize {
        self.palette_applications
    }
}

impl ThemeHost for HeadlessHost {
    fn palette(&self) -> Palette {
        self.palette
    }

    fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
        self.palette_applications += 1;
    }

    fn set_stylesheet(&mut self, stylesheet: &str) {
        self.stylesheet = Some(stylesheet.to_string());
    }
}

impl<T: ThemeHost + ?Sized> ThemeHost for std::rc::Rc<std::cell::RefCell<T>> {
    fn palette(&self) -> Palette {
        self.borrow().palette()
    }

    fn set_palette(&mut self, palette: Palette) {
        self.borrow_mut().set_palette(palette);
    }

    fn set_stylesheet(&mut self, stylesheet: &str) {
        self.borrow_mut().set_stylesheet(stylesheet);
    }
}
