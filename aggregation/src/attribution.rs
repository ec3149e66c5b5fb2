use rand::Rng;

use crate::participant::{ParticipantId, Side};

// a missing actor is the environment, credit goes to a uniformly drawn
// member of the given pool
pub fn resolve(actor: Option<ParticipantId>, pool: Side, rng: &mut impl Rng) -> ParticipantId {
    match actor {
        Some(id) => id,
        None => {
            let members = pool.participants();
            members[rng.gen_range(0..members.len())]
        }
    }
}
