//! Fixed mapping from gamepad buttons and d-pad to mouse buttons and arrow keys.

use evdevil::event::{InputEvent, Key, Rel};

use super::event::{
    key_event, rel_event, syn_report, ABS_HAT0X, ABS_HAT0Y, BTN_EAST, BTN_SOUTH, BTN_TL, BTN_TR,
    BTN_WEST, EV_ABS, EV_KEY,
};

/// One translated event destined for the virtual pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Key(Key, i32),
    Rel(Rel, i32),
    /// SYN_REPORT, always the last entry of a flushed batch.
    Sync,
}

impl Output {
    pub fn to_event(self) -> InputEvent {
        match self {
            Output::Key(key, value) => key_event(key, value),
            Output::Rel(rel, value) => rel_event(rel, value),
            Output::Sync => syn_report(),
        }
    }
}

/// Raw gamepad events we react to. Anything else is `Unhandled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamepadInput {
    East(i32),
    West(i32),
    South(i32),
    TriggerRight(i32),
    TriggerLeft(i32),
    HatX(i32),
    HatY(i32),
    Unhandled,
}

impl GamepadInput {
    pub fn classify(ev: &InputEvent) -> Self {
        let value = ev.raw_value();
        match (ev.event_type().raw(), ev.raw_code()) {
            (EV_KEY, BTN_EAST) => GamepadInput::East(value),
            (EV_KEY, BTN_WEST) => GamepadInput::West(value),
            (EV_KEY, BTN_SOUTH) => GamepadInput::South(value),
            (EV_KEY, BTN_TR) => GamepadInput::TriggerRight(value),
            (EV_KEY, BTN_TL) => GamepadInput::TriggerLeft(value),
            (EV_ABS, ABS_HAT0X) => GamepadInput::HatX(value),
            (EV_ABS, ABS_HAT0Y) => GamepadInput::HatY(value),
            _ => GamepadInput::Unhandled,
        }
    }
}

/// Append the outputs for one gamepad input to `out`.
///
/// Button values pass through unchanged (including autorepeat `2`). The
/// triggers re-send Ctrl and Alt with every change of the trigger button.
/// A centred hat releases both directions of its axis.
pub fn translate(input: GamepadInput, out: &mut Vec<Output>) {
    match input {
        GamepadInput::East(value) => out.push(Output::Key(Key::BTN_LEFT, value)),
        GamepadInput::West(value) | GamepadInput::South(value) => {
            out.push(Output::Key(Key::BTN_RIGHT, value))
        }
        GamepadInput::TriggerRight(value) => {
            out.push(Output::Key(Key::KEY_LEFTCTRL, value));
            out.push(Output::Key(Key::KEY_LEFTALT, value));
            out.push(Output::Key(Key::KEY_RIGHT, value));
        }
        GamepadInput::TriggerLeft(value) => {
            out.push(Output::Key(Key::KEY_LEFTCTRL, value));
            out.push(Output::Key(Key::KEY_LEFTALT, value));
            out.push(Output::Key(Key::KEY_LEFT, value));
        }
        GamepadInput::HatX(value) => {
            hat(value, Key::KEY_RIGHT, Key::KEY_LEFT, [Key::KEY_RIGHT, Key::KEY_LEFT], out)
        }
        GamepadInput::HatY(value) => {
            hat(value, Key::KEY_DOWN, Key::KEY_UP, [Key::KEY_UP, Key::KEY_DOWN], out)
        }
        GamepadInput::Unhandled => {}
    }
}

/// `release` is emitted in the given order when the hat is centred.
fn hat(value: i32, on_positive: Key, on_negative: Key, release: [Key; 2], out: &mut Vec<Output>) {
    match value {
        1 => out.push(Output::Key(on_positive, 1)),
        -1 => out.push(Output::Key(on_negative, 1)),
        _ => out.extend(release.map(|key| Output::Key(key, 0))),
    }
}
