// Pattern 1: Command Pattern - Invoker, Receivers, Null Command
// Turns a request into a stand-alone object holding the receiver it acts on,
// so the invoker can trigger actions without knowing any receiver's type.

use std::cell::RefCell;
use std::rc::Rc;

use colored::Colorize;

// ============================================================================
// Receiver identifiers
// ============================================================================

/// Slot key for the remote control. Fixed at compile time; `None` is a spare
/// slot that is never registered, so pressing it exercises the null command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Receiver {
    Light,
    Fan,
    Door,
    Oven,
    None,
}

impl Receiver {
    const COUNT: usize = 5;

    fn slot(self) -> usize {
        self as usize
    }
}

// ============================================================================
// Receivers
// ============================================================================

struct Light {
    on: bool,
}

impl Light {
    fn new() -> Self {
        Self { on: false }
    }

    fn on(&mut self) {
        self.on = true;
        println!("The light is on");
    }

    fn off(&mut self) {
        self.on = false;
        println!("The light is off");
    }
}

struct Fan {
    on: bool,
}

impl Fan {
    fn new() -> Self {
        Self { on: false }
    }

    fn on(&mut self) {
        self.on = true;
        println!("The fan is on");
    }

    fn off(&mut self) {
        self.on = false;
        println!("The fan is off");
    }
}

// ============================================================================
// Commands
// ============================================================================

trait Command {
    fn execute(&self);
}

/// Safe no-op that fills every unregistered slot, so dispatch never has to
/// special-case "nothing registered".
struct NullCommand;

impl Command for NullCommand {
    fn execute(&self) {
        println!("Null command: does nothing");
    }
}

// The on- and off-commands for one appliance share the same receiver,
// hence the Rc<RefCell<_>> handle.
struct LightOnCommand {
    light: Rc<RefCell<Light>>,
}

impl Command for LightOnCommand {
    fn execute(&self) {
        self.light.borrow_mut().on();
    }
}

struct LightOffCommand {
    light: Rc<RefCell<Light>>,
}

impl Command for LightOffCommand {
    fn execute(&self) {
        self.light.borrow_mut().off();
    }
}

struct FanOnCommand {
    fan: Rc<RefCell<Fan>>,
}

impl Command for FanOnCommand {
    fn execute(&self) {
        self.fan.borrow_mut().on();
    }
}

struct FanOffCommand {
    fan: Rc<RefCell<Fan>>,
}

impl Command for FanOffCommand {
    fn execute(&self) {
        self.fan.borrow_mut().off();
    }
}

// ============================================================================
// Invoker
// ============================================================================

/// Holds the registered command pair per receiver slot. Both tables start
/// filled with `NullCommand`, so every slot is always valid to press.
struct RemoteControl {
    on_commands: Vec<Box<dyn Command>>,
    off_commands: Vec<Box<dyn Command>>,
}

impl RemoteControl {
    fn new() -> Self {
        let on_commands = (0..Receiver::COUNT)
            .map(|_| Box::new(NullCommand) as Box<dyn Command>)
            .collect();
        let off_commands = (0..Receiver::COUNT)
            .map(|_| Box::new(NullCommand) as Box<dyn Command>)
            .collect();

        Self {
            on_commands,
            off_commands,
        }
    }

    /// Replaces the command pair at `id`. Later registrations win.
    fn set_command(&mut self, id: Receiver, on_cmd: Box<dyn Command>, off_cmd: Box<dyn Command>) {
        self.on_commands[id.slot()] = on_cmd;
        self.off_commands[id.slot()] = off_cmd;
    }

    fn on_button_pressed(&self, id: Receiver) {
        self.on_commands[id.slot()].execute();
    }

    fn off_button_pressed(&self, id: Receiver) {
        self.off_commands[id.slot()].execute();
    }
}

// ============================================================================
// Client
// ============================================================================

fn main() {
    println!("{}", "Pattern 1: Command Pattern".bold());
    println!("==========================\n");

    // Receivers
    let light = Rc::new(RefCell::new(Light::new()));
    let fan = Rc::new(RefCell::new(Fan::new()));

    // Invoker
    let mut control = RemoteControl::new();

    println!("{}", "=== Light ===".green());
    control.set_command(
        Receiver::Light,
        Box::new(LightOnCommand {
            light: light.clone(),
        }),
        Box::new(LightOffCommand {
            light: light.clone(),
        }),
    );
    control.on_button_pressed(Receiver::Light);
    control.off_button_pressed(Receiver::Light);

    println!("\n{}", "=== Fan ===".green());
    control.set_command(
        Receiver::Fan,
        Box::new(FanOnCommand { fan: fan.clone() }),
        Box::new(FanOffCommand { fan: fan.clone() }),
    );
    control.on_button_pressed(Receiver::Fan);
    control.off_button_pressed(Receiver::Fan);

    println!("\n{}", "=== Unregistered slot ===".green());
    control.on_button_pressed(Receiver::None);
}

// ============================================================================
// Tests
// ============================================================================
