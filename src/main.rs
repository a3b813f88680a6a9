use log::error;

use chipvm_gui::Application;

fn main() {
    env_logger::init();

    if let Err(err) = Application::run() {
        error!("the window closed with an error: {err}");
        std::process::exit(1);
    }
}
