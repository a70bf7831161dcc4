mod assets;
mod board;
mod cards;
mod components;
mod config;
mod editor;
mod hex;
mod land;
mod persist;
mod render;
mod state;
mod terrain;
mod util;

use components::app::App;

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
