mod harness;

mod undo_redo;
