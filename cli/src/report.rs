use std::io::{self, Write};

use frontend::Configuration;

/// Echoes the resolved configuration, one `<flag> flag: <value>` line each.
pub fn write_report(config: &Configuration, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "shake tree flag: {}", config.shake_tree())?;
    writeln!(out, "stdlib flag: {}", config.stdlib_path().display())?;
    writeln!(out, "arch flag: {}", config.arch())?;
    writeln!(out, "emit_ir flag: {}", config.emit_ir())?;
    writeln!(out, "source files flag: {}", config.source_files().display())?;
    for (flag, phase) in config.phases().requests() {
        writeln!(out, "{flag} flag: {phase}")?;
    }
    Ok(())
}
