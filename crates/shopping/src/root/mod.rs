mod delete;
mod merge;
mod toggle;

use std::ops::Deref;

pub use merge::*;

#[derive(Clone)]
pub struct Command(weekmenu_shared::State);

impl Deref for Command {
    type Target = weekmenu_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Command {
    pub fn new(state: weekmenu_shared::State) -> Self {
        Self(state)
    }
}
