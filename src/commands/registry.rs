// src/commands/registry.rs
use std::collections::HashMap;

use super::types::Command;

pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self { commands: HashMap::new() }
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

use super::apt::{AptCommand, AptGetCommand};
use super::cat::CatCommand;
use super::cd::CdCommand;
use super::clear::ClearCommand;
use super::cp::CpCommand;
use super::echo::EchoCommand;
use super::help::HelpCommand;
use super::ls::LsCommand;
use super::mkdir::MkdirCommand;
use super::pwd::PwdCommand;
use super::touch::TouchCommand;

/// Registry holding every shell command.
pub fn default_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register(Box::new(PwdCommand));
    registry.register(Box::new(CdCommand));
    registry.register(Box::new(LsCommand));
    registry.register(Box::new(MkdirCommand));
    registry.register(Box::new(TouchCommand));
    registry.register(Box::new(CatCommand));
    registry.register(Box::new(EchoCommand));
    registry.register(Box::new(CpCommand));
    registry.register(Box::new(AptCommand));
    registry.register(Box::new(AptGetCommand));
    registry.register(Box::new(ClearCommand));
    registry.register(Box::new(HelpCommand));
    registry
}
