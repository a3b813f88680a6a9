//! # chipvm-gui
//!
//! A GUI host for the chipvm-core virtual machine

use std::cell::RefCell;
use std::fs;
use std::rc::Rc;

use iced::keyboard;
use iced::time::{self, Instant};
use iced::widget::{button, column, text};
use iced::{Element, Fill, Subscription, Task};
use iced_aw::menu::{Item, Menu, MenuBar};
use log::{error, info};
use rfd::{AsyncFileDialog, FileHandle};

use chipvm_core::{Config, Cpu, Input, Keypad, RomBuffer, Scheduler, SchedulerState};

mod constants;
mod keymap;
mod widgets;

/// Messages that are used for communication between iced widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// A message that is used as a clock source's signal
    Tick(Instant),
    KeyPressed(keyboard::Key),
    KeyReleased(keyboard::Key),
    FileSelectButtonClicked,
    FileSelected(Option<FileHandle>),
}

/// The main application struct, which constructs GUI and reacts on messages
pub struct Application {
    scheduler: Scheduler,
    keypad: Rc<RefCell<Keypad>>,
    display: widgets::Display,
    last_tick: Option<Instant>,
}

impl Application {
    /// Starts the emulator and creates a window with which a user can interact
    ///
    /// # Examples
    ///
    /// ```ignore
    /// use chipvm_gui::Application;
    ///
    /// let _ = Application::run();
    /// ```
    pub fn run() -> iced::Result {
        iced::application(Application::default, Application::update, Application::view)
            .title(constants::APP_NAME)
            .subscription(Application::subscription)
            .run()
    }

    /// Creates a full view of the main window
    pub fn view(&self) -> Element<'_, Message> {
        // Create a menu bar, used to control the state of the emulator
        let bar = MenuBar::new(vec![Item::with_menu(
            button("File"),
            Menu::new(vec![Item::new(
                button("Select Rom")
                    .on_press(Message::FileSelectButtonClicked)
                    .width(Fill),
            )])
            .width(180.0),
        )]);

        let status = match self.scheduler.state() {
            SchedulerState::Running => String::new(),
            SchedulerState::Stopped => "Pick a rom from the File menu".to_string(),
            SchedulerState::Halted(error) => format!("Halted: {error}"),
        };

        column![bar, text(status), self.display.view()]
            .width(Fill)
            .height(Fill)
            .into()
    }

    /// The function, called by iced when there is a message, queued for this application
    pub fn update(&mut self, message: Message) -> iced::Task<Message> {
        match message {
            Message::Tick(now) => {
                let elapsed = self
                    .last_tick
                    .map_or(constants::TICK_INTERVAL, |last| now.duration_since(last));
                self.last_tick = Some(now);
                // a fault is logged by the scheduler and shows up in the status line, whatever
                // was drawn before it still gets shown
                let _ = self.scheduler.advance(elapsed);
                self.display.publish(self.scheduler.frame());
            }
            Message::KeyPressed(key) => {
                if let Some(i) = Self::to_index(&key) {
                    self.keypad.borrow_mut().set_key_state(i, true)
                }
            }
            Message::KeyReleased(key) => {
                if let Some(i) = Self::to_index(&key) {
                    self.keypad.borrow_mut().set_key_state(i, false)
                }
            }

            Message::FileSelectButtonClicked => {
                return Task::perform(
                    AsyncFileDialog::new()
                        .add_filter("Chip8 ROM files".to_string(), &["ch8", "8o"])
                        .pick_file(),
                    Message::FileSelected,
                );
            }

            Message::FileSelected(Some(filehandle)) => self.load_rom(&filehandle),

            Message::FileSelected(None) => {}
        }

        Task::none()
    }

    fn load_rom(&mut self, filehandle: &FileHandle) {
        let path = filehandle.path();
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                error!("could not read {}: {err}", path.display());
                return;
            }
        };

        self.keypad.borrow_mut().release_all();
        match self.scheduler.reset(&RomBuffer::from_bytes(bytes)) {
            Ok(()) => {
                info!("running {}", path.display());
                self.last_tick = None;
                self.display.publish(self.scheduler.frame());
            }
            Err(err) => error!("could not load {}: {err}", path.display()),
        }
    }

    /// Creates a specific task, that is run asynchronously by iced
    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch(vec![
            keyboard::listen().filter_map(|event| match event {
                keyboard::Event::KeyPressed { key, .. } => Some(Message::KeyPressed(key)),
                keyboard::Event::KeyReleased { key, .. } => Some(Message::KeyReleased(key)),
                _ => None,
            }),
            time::every(constants::TICK_INTERVAL).map(Message::Tick),
        ])
    }

    /// The function is used to convert iced::keyboard::Key values to key indexes, used inside the
    /// emulator
    fn to_index(key: &keyboard::Key) -> Option<u8> {
        match key {
            keyboard::Key::Character(ch) => keymap::keymap(ch.as_str()),
            keyboard::Key::Named(named) => keymap::named_keymap(*named),
            _ => None,
        }
    }
}

impl Default for Application {
    fn default() -> Self {
        let keypad = Rc::new(RefCell::new(Keypad::default()));
        let pressed = Rc::clone(&keypad);
        let cpu = Cpu::blank(move || pressed.borrow().pressed_keys(), Config::default());

        // nothing to run until a rom gets picked
        let mut scheduler = Scheduler::new(cpu);
        scheduler.stop();

        Self {
            display: widgets::Display::new(scheduler.frame()),
            scheduler,
            keypad,
            last_tick: None,
        }
    }
}
