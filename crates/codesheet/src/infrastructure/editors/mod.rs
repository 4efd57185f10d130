mod memory;

pub use memory::MemoryEditor;
