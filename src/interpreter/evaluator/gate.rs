/// A stack of booleans deciding whether statements have any effect.
///
/// The bottom frame is always `true`. Entering a block body pushes a frame,
/// leaving it pops the frame again. Only the top frame is consulted: a body
/// runs when the value pushed for it is `true`.
///
/// # Example
/// ```
/// use juicy::interpreter::evaluator::gate::ExecutionGate;
///
/// let mut gate = ExecutionGate::new();
/// assert!(gate.is_active());
///
/// gate.push(false);
/// assert!(!gate.is_active());
/// assert_eq!(gate.depth(), 2);
///
/// gate.pop();
/// gate.pop();
/// assert!(gate.is_active());
/// assert_eq!(gate.depth(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionGate {
    frames: Vec<bool>,
}

impl Default for ExecutionGate {
    fn default() -> Self {
        Self::new()
    }
}

impl ExecutionGate {
    /// Creates a gate holding only the bottom `true` frame.
    #[must_use]
    pub fn new() -> Self {
        Self { frames: vec![true] }
    }

    /// Returns the top frame.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.frames.last().copied().unwrap_or(true)
    }

    /// Pushes the frame for a block that is about to run.
    pub fn push(&mut self, enabled: bool) {
        self.frames.push(enabled);
    }

    /// Pops the frame of the block that just finished. The bottom frame is
    /// never removed.
    pub fn pop(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    /// Number of frames, the bottom one included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}
