//! Tier-gated sponsor resources: selection + passphrase state machine.
//!
//! The passphrases ship in the client bundle. This is a content-gating
//! convenience for sponsors who received their welcome email, not an
//! authentication system.

/// Sponsorship tier. Order here is the display order of the selector buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Community,
    Silver,
    Gold,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Community, Tier::Silver, Tier::Gold];

    pub fn label(self) -> &'static str {
        match self {
            Tier::Community => "Community",
            Tier::Silver => "Silver",
            Tier::Gold => "Gold",
        }
    }

    /// Expected passphrase, compared with case-sensitive exact equality.
    pub fn passphrase(self) -> &'static str {
        match self {
            Tier::Community => "weloveyou",
            Tier::Silver => "willcreatesart",
            Tier::Gold => "chainlink",
        }
    }

    /// Onboarding guide paragraphs revealed after a successful unlock.
    pub fn guide(self) -> &'static [&'static str] {
        match self {
            Tier::Community => &[
                "Welcome to the Cyberjam family! As a Community sponsor your logo \
                 appears on the event website and the attendee t-shirt, and you are \
                 welcome to set up a table in the sponsor corner at 1871 for the \
                 duration of the jam.",
                "Your package includes 2 event passes. Send your logo (SVG or \
                 high-resolution PNG) and the names of your attendees to \
                 sponsors@cyberjam.tech by October 4th so we can get everything \
                 printed in time.",
                "Questions about logistics, shipping swag to the venue, or anything \
                 else? Reply to your welcome email and our sponsor liaison will get \
                 back to you within a day.",
            ],
            Tier::Silver => &[
                "Welcome aboard as a Silver sponsor! On top of the Community \
                 benefits, your brand is attached to one of the five thematic \
                 tracks of your choice, and a member of your team joins the \
                 judging panel for that track's demo day.",
                "Your package includes 5 event passes and a full-page placement in \
                 the sponsor deck shared with every team. We will also run two \
                 social shoutouts from the Cyberjam accounts in the weeks before \
                 the event.",
                "To claim your track, email sponsors@cyberjam.tech with your top \
                 two choices by September 27th. Tracks are assigned first come, \
                 first served. Judging briefs and the demo-day schedule follow two \
                 weeks before the jam.",
            ],
            Tier::Gold => &[
                "Welcome, Gold sponsor! You receive naming rights for one of the \
                 five thematic tracks, a keynote slot at the opening ceremony, and \
                 a one-hour workshop with the teams during the first weekend of \
                 the jam.",
                "Your package includes 10 event passes, recruiting access to the \
                 opt-in attendee resume book, and priority renewal for next year's \
                 Cyberjam before sponsorship opens publicly.",
                "Your dedicated liaison will reach out this week to schedule your \
                 keynote tech check and workshop slot. Deliverables we need from \
                 you: logo package, a 50-word company blurb, and your keynote title \
                 by September 20th.",
            ],
        }
    }
}

/// Gate state for the sponsor resources panel.
///
/// A tagged variant rather than separate selected/unlocked flags, so an
/// unlocked guide can never disagree with the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateState {
    /// No tier selected yet; nothing but the selector buttons is shown.
    #[default]
    Idle,
    /// A tier is selected and waiting for its passphrase.
    Locked(Tier),
    /// The selected tier's passphrase matched; its guide is visible.
    Unlocked(Tier),
}

/// Outcome of a passphrase submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempt {
    Granted(Tier),
    Denied,
}

impl GateState {
    /// Select a tier. Always lands in `Locked`, even when reselecting the
    /// current tier or a tier that is already unlocked: re-entry is required.
    pub fn select(self, tier: Tier) -> Self {
        GateState::Locked(tier)
    }

    /// Submit a passphrase attempt for the currently selected tier.
    ///
    /// Only a `Locked` gate can transition; `Idle` and `Unlocked` are
    /// unchanged (the form is not rendered in those states).
    pub fn submit(self, attempt: &str) -> (Self, Attempt) {
        match self {
            GateState::Locked(tier) if attempt == tier.passphrase() => {
                (GateState::Unlocked(tier), Attempt::Granted(tier))
            }
            other => (other, Attempt::Denied),
        }
    }

    pub fn selected(self) -> Option<Tier> {
        match self {
            GateState::Idle => None,
            GateState::Locked(tier) | GateState::Unlocked(tier) => Some(tier),
        }
    }

    pub fn unlocked(self) -> Option<Tier> {
        match self {
            GateState::Unlocked(tier) => Some(tier),
            _ => None,
        }
    }

    /// The passphrase form is shown iff this is true.
    pub fn awaiting_passphrase(self) -> bool {
        matches!(self, GateState::Locked(_))
    }
}

/// The whole panel model: gate state plus the transient passphrase input.
///
/// Selection and submission both clear the input here rather than in the
/// rendering layer, so "the field is empty after every selection and every
/// submission" holds by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gate {
    state: GateState,
    attempt: String,
}

impl Gate {
    /// Select a tier, clearing any typed passphrase and any prior unlock.
    pub fn select(&mut self, tier: Tier) {
        self.state = self.state.select(tier);
        self.attempt.clear();
    }

    /// Replace the passphrase input with what the field currently holds.
    pub fn input(&mut self, text: String) {
        self.attempt = text;
    }

    /// Submit the current input. The input is cleared on both outcomes.
    pub fn submit(&mut self) -> Attempt {
        let (next, outcome) = self.state.submit(&self.attempt);
        self.state = next;
        self.attempt.clear();
        outcome
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn attempt(&self) -> &str {
        &self.attempt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn exact_passphrase_unlocks_each_tier() {
        for tier in Tier::ALL {
            let gate = GateState::default().select(tier);
            assert!(gate.awaiting_passphrase());

            let (gate, outcome) = gate.submit(tier.passphrase());
            assert_eq!(gate, GateState::Unlocked(tier));
            assert_eq!(outcome, Attempt::Granted(tier));
            assert!(!gate.awaiting_passphrase());
        }
    }

    #[test]
    fn wrong_passphrase_stays_locked() {
        let gate = GateState::default().select(Tier::Gold);
        let (gate, outcome) = gate.submit("wrongpass");

        assert_eq!(outcome, Attempt::Denied);
        assert_eq!(gate, GateState::Locked(Tier::Gold));
        assert!(gate.awaiting_passphrase());
    }

    #[test]
    fn comparison_is_case_sensitive_and_exact() {
        for attempt in ["Chainlink", "CHAINLINK", "chainlink ", " chainlink", ""] {
            let gate = GateState::default().select(Tier::Gold);
            let (gate, outcome) = gate.submit(attempt);
            assert_eq!(outcome, Attempt::Denied, "attempt {attempt:?} should be denied");
            assert_eq!(gate, GateState::Locked(Tier::Gold));
        }
    }

    #[test]
    fn another_tiers_passphrase_does_not_unlock() {
        let gate = GateState::default().select(Tier::Gold);
        let (gate, outcome) = gate.submit(Tier::Community.passphrase());

        assert_eq!(outcome, Attempt::Denied);
        assert_eq!(gate, GateState::Locked(Tier::Gold));
    }

    #[test]
    fn selecting_a_new_tier_revokes_the_unlock() {
        let (gate, _) = GateState::default()
            .select(Tier::Community)
            .submit("weloveyou");
        assert_eq!(gate.unlocked(), Some(Tier::Community));

        let gate = gate.select(Tier::Silver);
        assert_eq!(gate, GateState::Locked(Tier::Silver));
        assert_eq!(gate.unlocked(), None);
        assert!(gate.awaiting_passphrase());

        let (gate, outcome) = gate.submit("willcreatesart");
        assert_eq!(outcome, Attempt::Granted(Tier::Silver));
        assert_eq!(gate.unlocked(), Some(Tier::Silver));
    }

    #[test]
    fn reselecting_the_unlocked_tier_forces_reentry() {
        let (gate, _) = GateState::default().select(Tier::Gold).submit("chainlink");
        assert_eq!(gate, GateState::Unlocked(Tier::Gold));

        let gate = gate.select(Tier::Gold);
        assert_eq!(gate, GateState::Locked(Tier::Gold));
    }

    #[test]
    fn submit_without_a_selection_is_a_no_op_denial() {
        let (gate, outcome) = GateState::Idle.submit("chainlink");
        assert_eq!(gate, GateState::Idle);
        assert_eq!(outcome, Attempt::Denied);
    }

    #[test]
    fn gold_retry_scenario() {
        let gate = GateState::default().select(Tier::Gold);

        let (gate, outcome) = gate.submit("wrongpass");
        assert_eq!(outcome, Attempt::Denied);
        assert_eq!(gate.unlocked(), None);

        let (gate, outcome) = gate.submit("chainlink");
        assert_eq!(outcome, Attempt::Granted(Tier::Gold));
        assert_eq!(gate, GateState::Unlocked(Tier::Gold));
    }

    #[test]
    fn input_is_cleared_after_every_submission() {
        let mut gate = Gate::default();
        gate.select(Tier::Gold);

        gate.input("wrongpass".into());
        assert_eq!(gate.submit(), Attempt::Denied);
        assert_eq!(gate.attempt(), "");

        gate.input("chainlink".into());
        assert_eq!(gate.submit(), Attempt::Granted(Tier::Gold));
        assert_eq!(gate.attempt(), "");
    }

    #[test]
    fn input_is_cleared_by_every_selection() {
        let mut gate = Gate::default();
        gate.select(Tier::Community);
        gate.input("welove".into());

        // Reselecting the same tier discards the half-typed passphrase.
        gate.select(Tier::Community);
        assert_eq!(gate.attempt(), "");
        assert_eq!(gate.state(), GateState::Locked(Tier::Community));

        gate.input("weloveyou".into());
        assert_eq!(gate.submit(), Attempt::Granted(Tier::Community));

        // Switching tiers after an unlock clears input and revokes the guide.
        gate.input("leftover".into());
        gate.select(Tier::Silver);
        assert_eq!(gate.attempt(), "");
        assert_eq!(gate.state(), GateState::Locked(Tier::Silver));
    }

    #[test]
    fn every_tier_has_a_distinct_passphrase_and_a_guide() {
        for tier in Tier::ALL {
            assert!(!tier.guide().is_empty());
            for other in Tier::ALL {
                if tier != other {
                    assert_ne!(tier.passphrase(), other.passphrase());
                }
            }
        }
    }
}
