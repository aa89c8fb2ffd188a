use num_integer::Integer;

pub const FULL_TURN: i32 = 360;

// Not a modulo. A sum past a full turn is reflected to `360 - sum`, and only then
// is a negative result pulled back up by one turn. 305 + 56 lands on 359,
// 305 + 57 on 358. Exactly 360 is left alone.
pub fn adjust_hue(hue: i32, amount: i32) -> i32 {
    let mut result = hue + amount;
    if result > FULL_TURN {
        result = FULL_TURN - result;
    }
    if result < 0 {
        result += FULL_TURN;
    }
    result
}

pub fn cycle_hue(hue: i32) -> i32 {
    hue.mod_floor(&FULL_TURN)
}
