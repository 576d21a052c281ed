use crate::{InputQueue, Paddle};

/// Apply pending commands to paddle velocities
pub fn ingest_inputs(left: &mut Paddle, right: &mut Paddle, queue: &mut InputQueue) {
    let (left_cmd, right_cmd) = queue.pop_inputs();

    if let Some(cmd) = left_cmd {
        left.set_velocity(cmd);
    }
    if let Some(cmd) = right_cmd {
        right.set_velocity(cmd);
    }
}
