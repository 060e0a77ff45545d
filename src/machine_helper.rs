use crate::buffer::BoundedBuffer;
use crate::utils::trace_log;
use crate::{BufferKind, Error, Limits, State};

/// State of the tag currently being parsed: the machine's state plus the three buffers.
#[derive(Debug)]
pub(crate) struct MachineHelper {
    pub(crate) state: State,
    pub(crate) name: BoundedBuffer,
    pub(crate) key: BoundedBuffer,
    pub(crate) value: BoundedBuffer,
}

impl Default for MachineHelper {
    fn default() -> Self {
        MachineHelper::new(Limits::default())
    }
}

impl MachineHelper {
    pub(crate) fn new(limits: Limits) -> Self {
        MachineHelper {
            state: State::Data,
            name: BoundedBuffer::new(limits.name),
            key: BoundedBuffer::new(limits.key),
            value: BoundedBuffer::new(limits.value),
        }
    }

    pub(crate) fn set_limits(&mut self, limits: Limits) {
        for kind in [BufferKind::Name, BufferKind::Key, BufferKind::Value] {
            self.buffer_mut(kind).set_capacity(limits.capacity_of(kind));
        }
    }

    fn buffer_mut(&mut self, kind: BufferKind) -> &mut BoundedBuffer {
        match kind {
            BufferKind::Name => &mut self.name,
            BufferKind::Key => &mut self.key,
            BufferKind::Value => &mut self.value,
        }
    }

    /// Append to one of the buffers. Overflowing it is attributed to the current state.
    #[inline]
    pub(crate) fn push(&mut self, kind: BufferKind, xs: &[u8]) -> Result<(), Error> {
        let state = self.state;
        self.buffer_mut(kind).extend(xs).map_err(|_| {
            trace_log!("{} buffer overflow in {} state", kind, state);
            Error::BufferOverflow {
                buffer: kind,
                state,
            }
        })
    }

    /// Forget the current attribute, keeping the tag name.
    pub(crate) fn reset_attribute(&mut self) {
        self.key.clear();
        self.value.clear();
    }

    /// Forget everything about the current tag.
    pub(crate) fn reset_tag(&mut self) {
        self.name.clear();
        self.reset_attribute();
    }

    pub(crate) fn switch_to(&mut self, state: State) {
        trace_log!("switch_to: {} -> {}", self.state, state);
        self.state = state;
    }
}
