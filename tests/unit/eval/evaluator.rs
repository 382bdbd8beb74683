use super::*;
use crate::config::presets::demo_reel;

fn reel() -> Reel {
    demo_reel().build().unwrap()
}

#[test]
fn frames_map_to_scene_local_time() {
    let reel = reel();
    let s = Evaluator::eval_frame(&reel, FrameIndex(89)).unwrap();
    assert_eq!(s.scene_id, "title");
    assert_eq!(s.local_frame, FrameIndex(89));
    let s = Evaluator::eval_frame(&reel, FrameIndex(90)).unwrap();
    assert_eq!(s.scene_id, "shapes");
    assert_eq!(s.scene_kind, "shape_dance");
    assert_eq!(s.local_frame, FrameIndex(0));
    let s = Evaluator::eval_frame(&reel, FrameIndex(689)).unwrap();
    assert_eq!(s.scene_id, "end");
    assert_eq!(s.local_frame, FrameIndex(119));
}

#[test]
fn out_of_bounds_frame_is_an_error() {
    let reel = reel();
    let err = Evaluator::eval_frame(&reel, FrameIndex(690)).unwrap_err();
    assert!(matches!(err, ReelError::Evaluation(_)));
}

#[test]
fn range_is_in_frame_order() {
    let reel = reel();
    let range = FrameRange::new(FrameIndex(85), FrameIndex(95)).unwrap();
    let states = Evaluator::eval_range(&reel, range, Threading::Sequential).unwrap();
    assert_eq!(states.len(), 10);
    assert!(states.iter().enumerate().all(|(i, s)| s.frame.0 == 85 + i as u64));
}

#[test]
fn parallel_range_matches_sequential() {
    let reel = reel();
    let range = FrameRange::new(FrameIndex(200), FrameIndex(260)).unwrap();
    let seq = Evaluator::eval_range(&reel, range, Threading::Sequential).unwrap();
    let par = Evaluator::eval_range(&reel, range, Threading::Parallel).unwrap();
    assert_eq!(seq, par);
}

#[test]
fn range_past_the_end_is_an_error() {
    let reel = reel();
    let range = FrameRange::new(FrameIndex(680), FrameIndex(700)).unwrap();
    assert!(Evaluator::eval_range(&reel, range, Threading::Parallel).is_err());
}
