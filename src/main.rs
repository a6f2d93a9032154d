#![no_std]
#![no_main]

extern crate rlibc;

use core::panic::PanicInfo;

use log::{debug, info, LevelFilter};
use rand::{rngs::SmallRng, SeedableRng};
use spin::Mutex;

use melt::{
    app::App,
    config::Config,
    devices::{
        display::{Buffer, DisplayManager},
        drivers::{read_button_edges, Keyboard},
        framebuffer::BUFFER_LEN,
    },
    hal::de1soc::{De1Soc, JtagWriter, FPGA_ONCHIP_BASE, SDRAM_BASE},
    kernel::{all_components_ready, init_phase, SerialLogger},
};

// Reset entry: stack at the top of DDR, zero .bss, then Rust.
core::arch::global_asm!(
    ".section .text._start, \"ax\"",
    ".global _start",
    "_start:",
    "    ldr sp, =_stack_top",
    "    ldr r0, =_sbss",
    "    ldr r1, =_ebss",
    "    mov r2, #0",
    "1:  cmp r0, r1",
    "    strlo r2, [r0], #4",
    "    blo 1b",
    "    bl board_main",
    "2:  b 2b",
);

pub static SERIAL: Mutex<JtagWriter> = Mutex::new(JtagWriter);

static LOGGER: SerialLogger<JtagWriter> = SerialLogger::new(&SERIAL, LevelFilter::Info);

#[macro_export]
macro_rules! println {
    ($($arg:tt)*) => {{
        use core::fmt::Write;
        let mut serial = $crate::SERIAL.lock();
        let _ = writeln!(serial, $($arg)*);
    }};
}

type BoardApp = App<De1Soc, SmallRng, &'static mut [u16]>;

#[no_mangle]
pub extern "C" fn board_main() -> ! {
    println!("Melting Snowman");

    match boot() {
        Ok(app) => app.run(),
        Err(e) => {
            println!("Boot failed: {}", e);
            park()
        }
    }
}

fn boot() -> Result<BoardApp, &'static str> {
    init_phase("Serial Logger", || LOGGER.install())?;

    let config = Config::new();
    let mut board = unsafe { De1Soc::take() };
    let (width, height) = board.resolution();
    info!("pixel buffer controller reports {}x{}", width, height);

    let (front, back) = unsafe { (pixel_memory(FPGA_ONCHIP_BASE), pixel_memory(SDRAM_BASE)) };
    let mut display = DisplayManager::new(
        Buffer::new(FPGA_ONCHIP_BASE, front),
        Buffer::new(SDRAM_BASE, back),
        config.theme.background,
    );
    init_phase("Display", || display.init(&mut board))?;

    init_phase("Input Devices", || {
        // Drop anything latched or typed before the game was ready.
        read_button_edges(&mut board);
        let mut keyboard = Keyboard::new();
        while keyboard.poll_key(&mut board).is_some() {}
        Ok(())
    })?;

    let seed = board.entropy();
    debug!("word pool seed {:#x}", seed);
    let rng = SmallRng::seed_from_u64(seed);

    if all_components_ready() {
        info!("board ready");
    }
    Ok(App::new(board, display, rng, config))
}

/// # Safety
/// `base` must be the start of a 512x240 pixel buffer nothing else uses.
unsafe fn pixel_memory(base: u32) -> &'static mut [u16] {
    unsafe { core::slice::from_raw_parts_mut(base as usize as *mut u16, BUFFER_LEN) }
}

fn park() -> ! {
    loop {
        core::hint::spin_loop();
    }
}

#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    let msg = info.message();
    let loc = info.location();
    println!("PANIC : {} | {:?}", msg, loc);

    park()
}
