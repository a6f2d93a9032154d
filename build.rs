use std::{env, fs::File, io::Write, path::Path};

fn main() {
    // Host builds (unit tests) link normally.
    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    if target_os != "none" {
        return;
    }

    let out_dir = env::var("OUT_DIR").unwrap();
    let link_path = Path::new(&out_dir).join("link.x");
    let mut f = File::create(&link_path).expect("failed to create link.x");

    // The preloader leaves the HPS DDR mapped at 0 and jumps to the ELF entry.
    // The framebuffers live above 0xC000_0000 and are not part of the image.
    writeln!(f, "ENTRY(_start)").unwrap();
    writeln!(f, "MEMORY {{").unwrap();
    writeln!(f, "  DDR (rwx) : ORIGIN = 0x00000000, LENGTH = 0x3FF00000").unwrap();
    writeln!(f, "}}").unwrap();
    writeln!(f, "_stack_top = ORIGIN(DDR) + LENGTH(DDR);").unwrap();
    writeln!(f, "SECTIONS {{").unwrap();
    writeln!(f, "  .text : {{ KEEP(*(.text._start)) *(.text .text.*) }} > DDR").unwrap();
    writeln!(f, "  .rodata : {{ *(.rodata .rodata.*) }} > DDR").unwrap();
    writeln!(f, "  .data : {{ *(.data .data.*) }} > DDR").unwrap();
    writeln!(f, "  .bss (NOLOAD) : {{ _sbss = .; *(.bss .bss.*) *(COMMON) _ebss = .; }} > DDR").unwrap();
    writeln!(f, "  /DISCARD/ : {{ *(.ARM.exidx .ARM.exidx.*) }}").unwrap();
    writeln!(f, "}}").unwrap();

    println!("cargo:rustc-link-search={}", out_dir);
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rerun-if-changed=build.rs");
}
