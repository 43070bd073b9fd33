mod save;

use std::ops::Deref;

pub use save::*;

#[derive(Clone)]
pub struct Command {
    state: weekmenu_shared::State,
    recipe: weekmenu_recipe::Command,
}

impl Deref for Command {
    type Target = weekmenu_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl Command {
    pub fn new(state: weekmenu_shared::State) -> Self {
        Self {
            recipe: weekmenu_recipe::Command::new(state.clone()),
            state,
        }
    }
}
