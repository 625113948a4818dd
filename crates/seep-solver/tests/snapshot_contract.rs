//! The recording contract: frame counts, spacing, and determinism.

use seep_core::StepId;
use seep_solver::run;
use seep_test_utils::diffusion_params;

#[test]
fn records_exactly_the_requested_frames() {
    let mut params = diffusion_params();
    params.steps = 100;
    params.store_frames = 5;
    let seq = run(&params).unwrap();

    let steps: Vec<u64> = seq.frames().iter().map(|f| f.step().0).collect();
    assert_eq!(steps, vec![0, 25, 50, 75, 100]);
}

#[test]
fn endpoints_always_recorded_for_two_or_more_frames() {
    for frames in [2, 3, 7, 50] {
        let mut params = diffusion_params();
        params.steps = 97;
        params.store_frames = frames;
        let seq = run(&params).unwrap();
        assert_eq!(seq.len(), frames as usize);
        assert_eq!(seq.first().unwrap().step(), StepId(0));
        assert_eq!(seq.last().unwrap().step(), StepId(97));
    }
}

#[test]
fn single_frame_request_records_the_final_state() {
    let mut params = diffusion_params();
    params.steps = 42;
    params.store_frames = 1;
    let seq = run(&params).unwrap();
    assert_eq!(seq.len(), 1);
    assert_eq!(seq.first().unwrap().step(), StepId(42));
}

#[test]
fn frame_request_clamps_to_available_states() {
    let mut params = diffusion_params();
    params.steps = 6;
    params.store_frames = 50;
    let seq = run(&params).unwrap();

    // A 6-step run has 7 states; every one is recorded.
    let steps: Vec<u64> = seq.frames().iter().map(|f| f.step().0).collect();
    assert_eq!(steps, vec![0, 1, 2, 3, 4, 5, 6]);
}

#[test]
fn frame_steps_are_strictly_increasing() {
    let mut params = diffusion_params();
    params.steps = 37;
    params.store_frames = 11;
    let seq = run(&params).unwrap();
    for w in seq.frames().windows(2) {
        assert!(w[0].step() < w[1].step());
    }
}

#[test]
fn every_frame_has_one_value_per_cell() {
    let params = diffusion_params();
    let seq = run(&params).unwrap();
    for frame in seq.frames() {
        assert_eq!(frame.field().len(), params.nx as usize);
    }
}

#[test]
fn identical_parameters_yield_identical_sequences() {
    let params = diffusion_params();
    let a = run(&params).unwrap();
    let b = run(&params).unwrap();
    assert_eq!(a, b, "runs must be bit-identical");
}

#[test]
fn first_frame_is_the_initial_condition() {
    let params = diffusion_params();
    let seq = run(&params).unwrap();
    let initial = seep_test_utils::initial_for(&params);
    assert_eq!(seq.first().unwrap().field(), &initial);
}
