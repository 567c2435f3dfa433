use crate::state::State;

/// Drives the fetch/decode/dispatch loop until the machine stops running.
pub(crate) fn run(mut state: State) -> State {
    while state.running {
        state = state.step();
    }

    state
}
