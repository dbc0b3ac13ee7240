mod app;
mod embed;
mod layout;
mod loader;
mod message;
mod player;
mod provider;
mod resolver;
mod state;
mod ui;

use state::App;

fn main() -> iced::Result {
    env_logger::init();

    iced::application("Matinee", App::update, App::view)
        .subscription(App::subscription)
        .run()
}
