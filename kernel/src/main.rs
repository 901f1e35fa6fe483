#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
#[macro_use]
mod kprint;
#[cfg(target_os = "none")]
mod entry;
#[cfg(target_os = "none")]
mod sbi;

#[cfg(target_os = "none")]
use kernel_lib::{
    boot,
    config,
    console::Console,
    error::BootError,
    layout::{BootLayout, LayoutError},
    logging,
    phase::Sequencer,
};

#[cfg(target_os = "none")]
extern "C" {
    static _stack_top: u8;
    static __bss_start: u8;
    static __bss_end: u8;
}

/// Entered from `_start` with `sp` already set; `boot_sp` is that value.
#[cfg(target_os = "none")]
#[no_mangle]
extern "C" fn kernel_main(boot_sp: usize) -> ! {
    let mut seq = Sequencer::new();

    if let Err(e) = run(&mut seq, boot_sp) {
        panic!("boot failed during '{}': {}", seq.current(), e);
    }

    loop {
        unsafe { riscv::asm::wfi(); }
    }
}

#[cfg(target_os = "none")]
fn run(seq: &mut Sequencer, boot_sp: usize) -> Result<(), BootError> {
    let layout = linker_layout()?;

    // SAFETY: layout.bss is this image's .bss, we are on the boot stack above
    // it, and nothing has read a static yet.
    unsafe { boot::early_init(seq, &layout)? };

    // .bss is valid from here on; the console and the log filter may be used.
    logging::set_log_level(config::DEFAULT_LOG_LEVEL);
    boot::start_running(seq)?;

    match layout.check_stack(boot_sp) {
        Ok(()) => kdebug!("boot sp {:#x}", boot_sp),
        Err(e) => kerror!("{}", e),
    }
    kdebug!(
        ".bss {:#x}..{:#x} cleared ({} bytes)",
        layout.bss.start(),
        layout.bss.end(),
        layout.bss.len()
    );

    boot::greet(&mut *kprint::CONSOLE.lock());
    println!("\n\nHello {}", "World!");
    println!("1 + 2 = {}, {:x}", 1 + 2, 0x1234abcd);

    boot::enter_idle(seq)?;
    kinfo!("boot complete, {}", seq.current());
    Ok(())
}

/// Take the addresses of the linker symbols; the bytes behind them are never read.
#[cfg(target_os = "none")]
fn linker_layout() -> Result<BootLayout, LayoutError> {
    let (stack_top, bss_start, bss_end) = unsafe {
        (
            (&raw const _stack_top) as usize,
            (&raw const __bss_start) as usize,
            (&raw const __bss_end) as usize,
        )
    };
    BootLayout::new(stack_top, bss_start, bss_end)
}

#[cfg(target_os = "none")]
#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    use core::fmt::Write;

    // Fresh console: the shared one may be locked, or .bss not yet cleared.
    let mut con = Console::new(sbi::Firmware);
    let _ = writeln!(con, "\n*** KERNEL PANIC ***");
    if let Some(loc) = info.location() {
        let _ = writeln!(con, "at {}:{}:{}", loc.file(), loc.line(), loc.column());
    }
    let _ = writeln!(con, "{}", info.message());

    loop {
        unsafe { riscv::asm::wfi(); }
    }
}

#[cfg(not(target_os = "none"))]
fn main() {
    eprintln!("kernel: build with --target riscv64gc-unknown-none-elf; host builds only run the library tests");
    std::process::exit(1);
}
