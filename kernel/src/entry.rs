use core::arch::global_asm;

// _start: the image's first instruction, placed first in .text by kernel.ld.
// Runs once, with no stack, no cleared .bss, nothing initialized.
// It must not touch memory: load sp, hand it to kernel_main in a0 (so the
// layout check can see what we actually got) and jump.
global_asm!(
    r#"
    .section .text.entry
    .globl _start
_start:
    la   sp, _stack_top
    mv   a0, sp
    la   t0, kernel_main
    jr   t0
"#
);
