//! Fuzz target for the BillSession state machine
//!
//! Ensure domain clamping and derived-value consistency (HIGH priority)
//!
//! # Strategy
//!
//! - Arbitrary operation sequences: hostile bill text, repeated submits,
//!   split presses far past the bounds, NaN/infinite slider positions
//! - State verification after every operation
//!
//! # Invariants
//!
//! - split count stays within [1, 100]
//! - tip percent stays within [0, 100], derived from the slider position
//! - derived outputs always match the current inputs (no stale state)
//! - no operation panics

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tabsplit_app::BillSession;
use tabsplit_core::{SPLIT_MAX, SPLIT_MIN, TIP_MAX, tip_amount, total_per_person};

#[derive(Debug, Arbitrary)]
enum SessionOp {
    SetText(String),
    Submit,
    IncrementSplit,
    DecrementSplit,
    MoveSlider(f64),
    Reset,
}

fuzz_target!(|ops: Vec<SessionOp>| {
    let mut session = BillSession::new();

    for op in ops {
        match op {
            SessionOp::SetText(text) => session.set_bill_text(text),
            SessionOp::Submit => {
                let _ = session.submit_bill();
            }
            SessionOp::IncrementSplit => session.increment_split(),
            SessionOp::DecrementSplit => session.decrement_split(),
            SessionOp::MoveSlider(position) => session.set_slider_position(position),
            SessionOp::Reset => session.reset(),
        }

        let split = session.split_count();
        assert!((SPLIT_MIN..=SPLIT_MAX).contains(&split));

        let tip = session.tip_percent();
        assert!(tip <= TIP_MAX);

        let position = session.slider_position();
        assert!((0.0..=1.0).contains(&position));
        assert_eq!(tip, (position * 100.0).round() as u8);

        // Parsed amounts are always finite and non-negative.
        assert!(session.bill_amount().is_finite());
        assert!(session.bill_amount() >= 0.0);

        // Derived outputs are recomputed on every mutation; identical
        // computations must agree bit-for-bit.
        let expected_tip = tip_amount(session.bill_amount(), tip);
        assert_eq!(session.tip_amount().to_bits(), expected_tip.to_bits());

        let expected_total = total_per_person(session.bill_amount(), split, tip);
        assert!(matches!(
            expected_total,
            Ok(t) if t.to_bits() == session.total_per_person().to_bits()
        ));
    }
});
