//! Visibility State Machine
//!
//! `Closed -> Open` (or `Opening` while a fresh cart is being fetched),
//! `Open -> Closing -> Closed`. Closing completes through a one-shot
//! [`CloseTicket`]: the transition-end signal and the fallback timer both
//! present the same ticket and only the first one is honoured.

/// Drawer phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Closed,
    /// Visible and interactive, waiting on a fresh cart
    Opening,
    Open,
    /// Non-interactive, collapse animation running
    Closing,
}

impl Phase {
    pub fn is_open(self) -> bool {
        matches!(self, Phase::Opening | Phase::Open)
    }
}

/// Identifies one close attempt. Stale once consumed or superseded by a reopen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseTicket(u64);

/// Which completion path delivered the ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollapseSignal {
    TransitionEnd,
    FallbackTimer,
}

/// Phase plus the element to give focus back to
#[derive(Debug)]
pub struct DrawerState<F> {
    phase: Phase,
    generation: u64,
    last_focused: Option<F>,
}

impl<F> Default for DrawerState<F> {
    fn default() -> Self {
        Self { phase: Phase::Closed, generation: 0, last_focused: None }
    }
}

impl<F> DrawerState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase.is_open()
    }

    /// Enter the open phase. `awaiting_cart` selects `Opening` over `Open`.
    ///
    /// Any pending close ticket is invalidated.
    pub fn open(&mut self, focused: Option<F>, awaiting_cart: bool) {
        self.generation += 1;
        self.last_focused = focused;
        self.phase = if awaiting_cart { Phase::Opening } else { Phase::Open };
    }

    /// `Opening -> Open`. Returns false in any other phase.
    pub fn settle_open(&mut self) -> bool {
        if self.phase == Phase::Opening {
            self.phase = Phase::Open;
            true
        } else {
            false
        }
    }

    /// Start closing. `None` when nothing is open.
    pub fn close(&mut self) -> Option<CloseTicket> {
        if !self.phase.is_open() {
            return None;
        }
        self.generation += 1;
        self.phase = Phase::Closing;
        Some(CloseTicket(self.generation))
    }

    pub fn pending_close(&self) -> Option<CloseTicket> {
        (self.phase == Phase::Closing).then_some(CloseTicket(self.generation))
    }

    /// Consume a ticket. On success returns the element to refocus
    /// (`Some(None)` when nothing was captured); `None` if the ticket is stale.
    pub fn finish_close(&mut self, ticket: CloseTicket) -> Option<Option<F>> {
        if self.phase != Phase::Closing || ticket.0 != self.generation {
            return None;
        }
        self.phase = Phase::Closed;
        Some(self.last_focused.take())
    }
}
