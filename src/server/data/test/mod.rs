mod host;
mod panel;
