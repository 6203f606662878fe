use crossterm::event::KeyEvent;

use super::GenerationRequest;
use super::ProjectSpecification;

pub enum Event {
    GenerationCompleted(u64, GenerationRequest, Vec<ProjectSpecification>),
    GenerationFailed(u64, String),
    Notice(String),
    KeyboardCharInput(KeyEvent),
    KeyboardCTRLC(),
    KeyboardCTRLR(),
    KeyboardEnter(),
    UIResize(),
    UIScrollDown(),
    UIScrollUp(),
    UIScrollPageDown(),
    UIScrollPageUp(),
    UITick(),
}
