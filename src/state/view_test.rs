use super::*;

#[test]
fn begin_returns_increasing_tokens() {
    let generation = ViewGeneration::default();
    let first = generation.begin();
    let second = generation.begin();
    assert!(second > first);
}

#[test]
fn later_generation_invalidates_earlier_fetches() {
    let generation = ViewGeneration::default();
    let question = generation.begin();
    assert!(generation.is_current(question));

    // A results view starts while the question fetch is still in flight.
    let results = generation.begin();
    assert!(!generation.is_current(question));
    assert!(generation.is_current(results));
}

#[test]
fn start_arm_claims_once_until_released() {
    let arm = StartArm::default();
    assert!(arm.try_claim());
    // A repeated prompt while armed must not stack a second listener.
    assert!(!arm.try_claim());

    arm.release();
    assert!(arm.try_claim());
}

#[test]
fn start_arm_rearms_after_view_replacement() {
    let arm = StartArm::default();
    assert!(arm.try_claim());

    // The view holding the armed control is replaced without a click;
    // the transition releases the claim so a later prompt can re-arm.
    arm.release();
    assert!(arm.try_claim());
}

#[test]
fn start_arm_clones_share_the_claim() {
    let arm = StartArm::default();
    let handle = arm.clone();
    assert!(arm.try_claim());
    assert!(!handle.try_claim());

    handle.release();
    assert!(arm.try_claim());
}

#[test]
fn clones_share_the_same_counter() {
    let generation = ViewGeneration::default();
    let handle = generation.clone();

    let issued = generation.begin();
    assert!(handle.is_current(issued));

    handle.begin();
    assert!(!generation.is_current(issued));
}
