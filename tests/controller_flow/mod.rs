pub mod fixtures;

mod loading;
mod selection;
mod session;
