// Pattern 2: Abstract Factory - Families of Related Products
// One factory interface creates a whole family of windows, so the client
// never names a concrete toolkit type.

use colored::Colorize;

// ============================================================================
// Product
// ============================================================================

struct Window {
    toolkit: &'static str,
    kind: &'static str,
}

impl Window {
    fn toolkit(&self) -> &str {
        self.toolkit
    }

    fn kind(&self) -> &str {
        self.kind
    }
}

// ============================================================================
// Abstract factory and concrete factories
// ============================================================================

trait UiFactory {
    fn toolbox_window(&self) -> Window;
    fn layers_window(&self) -> Window;
    fn main_window(&self) -> Window;
}

struct GtkFactory;

impl UiFactory for GtkFactory {
    fn toolbox_window(&self) -> Window {
        Window {
            toolkit: "Gtk",
            kind: "ToolboxWindow",
        }
    }

    fn layers_window(&self) -> Window {
        Window {
            toolkit: "Gtk",
            kind: "LayersWindow",
        }
    }

    fn main_window(&self) -> Window {
        Window {
            toolkit: "Gtk",
            kind: "MainWindow",
        }
    }
}

struct QtFactory;

impl UiFactory for QtFactory {
    fn toolbox_window(&self) -> Window {
        Window {
            toolkit: "Qt",
            kind: "ToolboxWindow",
        }
    }

    fn layers_window(&self) -> Window {
        Window {
            toolkit: "Qt",
            kind: "LayersWindow",
        }
    }

    fn main_window(&self) -> Window {
        Window {
            toolkit: "Qt",
            kind: "MainWindow",
        }
    }
}

/// The client builds the whole interface from one factory without ever
/// naming a concrete toolkit.
fn render_ui(factory: &dyn UiFactory) {
    for window in [
        factory.toolbox_window(),
        factory.layers_window(),
        factory.main_window(),
    ] {
        println!("{}:{}", window.toolkit(), window.kind());
    }
}

// ============================================================================
// Enum-selected variant (zero-cost)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Toolkit {
    Gtk,
    Qt,
}

impl Toolkit {
    fn factory(self) -> Box<dyn UiFactory> {
        match self {
            Toolkit::Gtk => Box::new(GtkFactory),
            Toolkit::Qt => Box::new(QtFactory),
        }
    }
}

fn detect_toolkit() -> Toolkit {
    // Stand-in for a real environment probe.
    if std::env::var("QT_QPA_PLATFORM").is_ok() {
        Toolkit::Qt
    } else {
        Toolkit::Gtk
    }
}

fn main() {
    println!("{}", "Pattern 2: Abstract Factory".bold());
    println!("===========================\n");

    println!("{}", "=== Runtime-selected toolkit ===".green());
    let toolkit = detect_toolkit();
    let factory = toolkit.factory();
    render_ui(&*factory);

    println!("\n{}", "=== Qt family for comparison ===".green());
    render_ui(&QtFactory);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gtk_factory_builds_gtk_family() {
        let factory = GtkFactory;
        assert_eq!(factory.toolbox_window().toolkit(), "Gtk");
        assert_eq!(factory.layers_window().toolkit(), "Gtk");
        assert_eq!(factory.main_window().toolkit(), "Gtk");
    }

    #[test]
    fn family_members_have_distinct_kinds() {
        let factory = QtFactory;
        assert_eq!(factory.toolbox_window().kind(), "ToolboxWindow");
        assert_eq!(factory.layers_window().kind(), "LayersWindow");
        assert_eq!(factory.main_window().kind(), "MainWindow");
    }

    #[test]
    fn enum_selection_matches_trait_object_factory() {
        let gtk = Toolkit::Gtk.factory();
        let qt = Toolkit::Qt.factory();
        assert_eq!(gtk.main_window().toolkit(), "Gtk");
        assert_eq!(qt.main_window().toolkit(), "Qt");
    }
}
