//! Validates urn sampling: repeat avoidance, refill, and exhaustion

use blockweave::GenerationError;
use blockweave::random::{Urn, XorShift32};

fn seeded_urn<T: Clone + PartialEq>(items: Vec<T>, seed: u32) -> blockweave::Result<Urn<T, XorShift32>> {
    Urn::new(items, XorShift32::new(seed)?)
}

#[test]
fn test_empty_collection_rejected() -> blockweave::Result<()> {
    let result = Urn::new(Vec::<i32>::new(), XorShift32::new(42)?);
    assert!(matches!(result, Err(GenerationError::EmptyCollection)));
    Ok(())
}

#[test]
fn test_singleton_always_returns_its_item() -> blockweave::Result<()> {
    let mut urn = seeded_urn(vec!['A'], 42)?;
    for _ in 0..10 {
        assert_eq!(urn.pick(), 'A');
    }
    Ok(())
}

// With duplicates in the backing collection a repeat is only ever forced
// through a single-item working set
#[test]
fn test_no_repeats_while_working_set_holds_choice() -> blockweave::Result<()> {
    let mut urn = seeded_urn(vec!['A', 'A', 'B'], 42)?;
    let mut last = None;
    for _ in 0..99 {
        let len_before = match urn.remaining_len() {
            0 => 3,
            len => len,
        };
        let picked = urn.pick();
        if len_before > 1 {
            assert_ne!(Some(picked), last);
        }
        last = Some(picked);
    }
    Ok(())
}

#[test]
fn test_distinct_items_never_repeat_consecutively() -> blockweave::Result<()> {
    let mut urn = seeded_urn(vec![1, 2, 3, 4, 5], 42)?;
    let picks: Vec<i32> = (0..100).map(|_| urn.pick()).collect();
    for pair in picks.windows(2) {
        assert_ne!(pair.first(), pair.last());
    }
    Ok(())
}

// The working set must empty completely before any refill, so each cycle
// of picks covers the whole backing collection
#[test]
fn test_full_exhaustion_before_refill() -> blockweave::Result<()> {
    let mut urn = seeded_urn(vec![1, 2, 3, 4, 5], 7)?;
    for _ in 0..4 {
        let mut cycle: Vec<i32> = (0..5).map(|_| urn.pick()).collect();
        cycle.sort_unstable();
        assert_eq!(cycle, vec![1, 2, 3, 4, 5]);
    }
    Ok(())
}

#[test]
fn test_refill_is_transparent() -> blockweave::Result<()> {
    let mut urn = seeded_urn(vec![1, 2, 3], 42)?;
    assert_eq!(urn.remaining_len(), 3);
    let _ = urn.pick();
    let _ = urn.pick();
    let _ = urn.pick();
    assert_eq!(urn.remaining_len(), 0);
    // The next pick refills first and draws from a fresh working set
    let _ = urn.pick();
    assert_eq!(urn.remaining_len(), 2);
    Ok(())
}

// A backing collection of identical items would make a naive
// redraw-until-different loop spin forever after the first refill; the
// urn forces the repeat instead
#[test]
fn test_all_duplicates_terminate() -> blockweave::Result<()> {
    let mut urn = seeded_urn(vec!['A', 'A'], 42)?;
    for _ in 0..10 {
        assert_eq!(urn.pick(), 'A');
    }
    Ok(())
}

#[test]
fn test_seeded_urns_are_deterministic() -> blockweave::Result<()> {
    let mut a = seeded_urn(vec![1, 2, 3, 4, 5], 42)?;
    let mut b = seeded_urn(vec![1, 2, 3, 4, 5], 42)?;
    for _ in 0..50 {
        assert_eq!(a.pick(), b.pick());
    }
    Ok(())
}

#[test]
fn test_backing_collection_is_untouched() -> blockweave::Result<()> {
    let mut urn = seeded_urn(vec![1, 2, 3], 42)?;
    for _ in 0..7 {
        let _ = urn.pick();
    }
    assert_eq!(urn.items(), &[1, 2, 3]);
    Ok(())
}

#[test]
fn test_entropy_urn_shares_the_interface() -> blockweave::Result<()> {
    let mut urn = Urn::with_entropy(vec![1, 2, 3])?;
    let mut last = None;
    for _ in 0..30 {
        let picked = urn.pick();
        assert!((1..=3).contains(&picked));
        // Distinct backing items never repeat consecutively
        assert_ne!(Some(picked), last);
        last = Some(picked);
    }
    Ok(())
}
