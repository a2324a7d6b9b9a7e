use crate::context::terminal::TerminalOperations;
use crate::error::BranchError;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Terminal that answers prompts from a fixed script and records all output
pub struct ScriptedTerminal {
    answers: Mutex<VecDeque<String>>,
    output: Mutex<Vec<String>>,
}

impl ScriptedTerminal {
    /// Answers are consumed in order; once exhausted, prompts see end of input
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().map(|a| a.to_string()).collect()),
            output: Mutex::new(Vec::new()),
        }
    }

    /// Everything printed so far, prompts and lines, in order
    pub fn output(&self) -> Vec<String> {
        self.output.lock().unwrap().clone()
    }

    /// Answers not yet consumed by a prompt
    pub fn remaining_answers(&self) -> usize {
        self.answers.lock().unwrap().len()
    }
}

impl TerminalOperations for ScriptedTerminal {
    fn prompt(&self, message: &str) -> Result<Option<String>, BranchError> {
        self.output.lock().unwrap().push(message.to_string());
        Ok(self.answers.lock().unwrap().pop_front())
    }

    fn print_line(&self, message: &str) -> Result<(), BranchError> {
        self.output.lock().unwrap().push(format!("{message}\n"));
        Ok(())
    }
}
