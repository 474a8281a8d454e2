mod common;
mod intake;
mod routing;
mod service;
