//! In-memory [`FileHandle`] for exercising the shredder without a disk.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use crate::file::FileHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Write,
    Sync,
    Size,
    Close,
    Remove,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Write { offset: u64, len: usize },
    Sync,
    Size,
    Close,
    Remove,
}

impl Call {
    pub fn op(&self) -> Op {
        match self {
            Self::Write { .. } => Op::Write,
            Self::Sync => Op::Sync,
            Self::Size => Op::Size,
            Self::Close => Op::Close,
            Self::Remove => Op::Remove,
        }
    }
}

/// Everything the handle observed, shared with the test after the handle is moved away.
#[derive(Debug, Default)]
pub struct State {
    pub calls: Vec<Call>,
    pub writes: Vec<Vec<u8>>,
    pub closed: bool,
    pub removed: bool,
}

impl State {
    pub fn count(&self, op: Op) -> usize {
        self.calls.iter().filter(|call| call.op() == op).count()
    }

    pub fn ops(&self) -> Vec<Op> {
        self.calls.iter().map(Call::op).collect()
    }
}

#[derive(Debug, Clone)]
pub struct MemoryFile {
    size: u64,
    faults: Vec<(Op, usize)>,
    short_writes: bool,
    state: Rc<RefCell<State>>,
}

impl MemoryFile {
    pub fn new(size: u64) -> Self {
        Self { size, faults: Vec::new(), short_writes: false, state: Rc::default() }
    }

    /// Makes the `nth` (1-based) call of `op` fail.
    pub fn failing(mut self, op: Op, nth: usize) -> Self {
        self.faults.push((op, nth));
        self
    }

    /// Reports one byte fewer than requested on every non-empty write.
    pub fn short_writes(mut self) -> Self {
        self.short_writes = true;
        self
    }

    pub fn state(&self) -> Rc<RefCell<State>> {
        Rc::clone(&self.state)
    }

    fn record(&self, call: Call) -> io::Result<()> {
        let op = call.op();
        let mut state = self.state.borrow_mut();
        state.calls.push(call);

        let nth = state.count(op);
        if self.faults.contains(&(op, nth)) {
            return Err(io::Error::other(format!("injected {op:?} failure on call {nth}")));
        }

        Ok(())
    }
}

impl FileHandle for MemoryFile {
    fn write_at(&mut self, buf: &[u8], offset: u64) -> io::Result<usize> {
        self.record(Call::Write { offset, len: buf.len() })?;
        self.state.borrow_mut().writes.push(buf.to_vec());

        if self.short_writes && !buf.is_empty() {
            return Ok(buf.len() - 1);
        }

        Ok(buf.len())
    }

    fn sync(&mut self) -> io::Result<()> {
        self.record(Call::Sync)
    }

    fn size(&mut self) -> io::Result<u64> {
        self.record(Call::Size)?;
        Ok(self.size)
    }

    fn close(&mut self) -> io::Result<()> {
        self.record(Call::Close)?;
        self.state.borrow_mut().closed = true;
        Ok(())
    }

    fn remove(&mut self) -> io::Result<()> {
        self.record(Call::Remove)?;
        self.state.borrow_mut().removed = true;
        Ok(())
    }
}
