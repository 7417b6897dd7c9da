use evdevil::event::{EventType, InputEvent, Key, Rel};

pub const EV_SYN: u16 = 0x00;
pub const EV_KEY: u16 = 0x01;
pub const EV_REL: u16 = 0x02;
pub const EV_ABS: u16 = 0x03;
pub const SYN_REPORT: u16 = 0;

// Linux gamepad protocol buttons (Documentation/input/gamepad.rst).
pub const BTN_SOUTH: u16 = 0x130;
pub const BTN_EAST: u16 = 0x131;
pub const BTN_NORTH: u16 = 0x133;
pub const BTN_WEST: u16 = 0x134;
pub const BTN_TL: u16 = 0x136;
pub const BTN_TR: u16 = 0x137;

pub const ABS_X: u16 = 0x00;
pub const ABS_Y: u16 = 0x01;
pub const ABS_RX: u16 = 0x03;
pub const ABS_RY: u16 = 0x04;
pub const ABS_HAT0X: u16 = 0x10;
pub const ABS_HAT0Y: u16 = 0x11;

pub fn key_event(key: Key, value: i32) -> InputEvent {
    InputEvent::new(EventType::from_raw(EV_KEY), key.raw(), value)
}

pub fn rel_event(rel: Rel, value: i32) -> InputEvent {
    InputEvent::new(EventType::from_raw(EV_REL), rel.raw(), value)
}

pub fn syn_report() -> InputEvent {
    InputEvent::new(EventType::from_raw(EV_SYN), SYN_REPORT, 0)
}

/// Human-readable name for a raw gamepad event, used by `dump`.
pub fn code_name(ty: u16, code: u16) -> String {
    match ty {
        EV_SYN => format!("SYN({})", code),
        EV_KEY => {
            let name = match code {
                BTN_SOUTH => "BTN_SOUTH",
                BTN_EAST => "BTN_EAST",
                BTN_NORTH => "BTN_NORTH",
                BTN_WEST => "BTN_WEST",
                BTN_TL => "BTN_TL",
                BTN_TR => "BTN_TR",
                0x138 => "BTN_TL2",
                0x139 => "BTN_TR2",
                0x13a => "BTN_SELECT",
                0x13b => "BTN_START",
                0x13c => "BTN_MODE",
                0x13d => "BTN_THUMBL",
                0x13e => "BTN_THUMBR",
                _ => "?",
            };
            format!("{}({})", name, code)
        }
        EV_ABS => {
            let name = match code {
                ABS_X => "X",
                ABS_Y => "Y",
                0x02 => "Z",
                ABS_RX => "RX",
                ABS_RY => "RY",
                0x05 => "RZ",
                ABS_HAT0X => "HAT0X",
                ABS_HAT0Y => "HAT0Y",
                _ => "?",
            };
            format!("ABS_{}({})", name, code)
        }
        _ => format!("type{} code{}", ty, code),
    }
}
