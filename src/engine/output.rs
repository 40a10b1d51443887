/// One piece of a message. Rendering decides the spacing between kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputBlock {
    Title(String),
    Text(String),
    Event(String),
    Exits(String),
}

/// Builds the single message string handed back to the session driver.
#[derive(Default, Debug)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Title(s));
        }
    }

    pub fn say(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Text(s));
        }
    }

    pub fn event(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Event(s));
        }
    }

    pub fn set_exits(&mut self, s: impl Into<String>) {
        let s = s.into();
        if s.trim().is_empty() {
            return;
        }

        // only one Exits block per message
        self.blocks.retain(|b| !matches!(b, OutputBlock::Exits(_)));
        self.blocks.push(OutputBlock::Exits(s));
    }

    /// Flatten the blocks into display text with its own line breaks.
    pub fn into_message(self) -> String {
        let mut lines: Vec<String> = Vec::new();
        let mut started_events = false;

        for block in self.blocks {
            match block {
                OutputBlock::Title(t) => {
                    if !lines.is_empty() {
                        lines.push(String::new());
                    }
                    lines.push(format!("== {} ==", t));
                }
                OutputBlock::Text(line) => lines.push(line),
                OutputBlock::Event(ev) => {
                    if !started_events && !lines.is_empty() {
                        lines.push(String::new());
                    }
                    started_events = true;
                    lines.push(ev);
                }
                OutputBlock::Exits(exits) => {
                    if !lines.is_empty() {
                        lines.push(String::new());
                    }
                    lines.push(exits);
                }
            }
        }

        lines.join("\n")
    }
}
