// soapdump - app/scripts.rs
//
// Shell completion scripts and the troff manual page. Printed verbatim by
// the auxiliary CLI flags, which exit before any log file is read.

use crate::core::model::{column_names, SCHEMA};
use crate::util::constants;
use std::fmt::Write as _;

/// Shells with a bundled completion script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
}

const BASH_COMPLETION: &str = r#"_soapdump_completions()
{
    local cur opts
    COMPREPLY=()
    cur="${COMP_WORDS[COMP_CWORD]}"
    opts="--help --version --summary --raw --format --config --debug --generate-bash-completion --generate-zsh-completion --generate-fish-completion --man"

    if [[ ${cur} == -* ]] ; then
        COMPREPLY=( $(compgen -W "${opts}" -- ${cur}) )
        return 0
    fi

    COMPREPLY=( $(compgen -f -X '!*.log' -- ${cur}) )
    return 0
}

complete -F _soapdump_completions soapdump
"#;

const ZSH_COMPLETION: &str = r#"#compdef soapdump

_arguments -s -S \
  '(-h --help)'{-h,--help}'[Show help message]' \
  '(-V --version)'{-V,--version}'[Show version]' \
  '(-s --summary -r --raw)'{-s,--summary}'[Show summary statistics only]' \
  '(-s --summary -r --raw)'{-r,--raw}'[Output raw structured data (default)]' \
  '(-f --format)'{-f,--format}'[Record format]:format:(raw csv json)' \
  '(-c --config)'{-c,--config}'[Config file]:config file:_files -g "*.toml"' \
  '(-d --debug)'{-d,--debug}'[Enable debug logging]' \
  '--generate-bash-completion[Generate Bash completion script]' \
  '--generate-zsh-completion[Generate Zsh completion script]' \
  '--generate-fish-completion[Generate Fish completion script]' \
  '--man[Generate man page]' \
  '*:log file:_files -g "*.log"'
"#;

const FISH_COMPLETION: &str = r#"complete -c soapdump -s h -l help -d "Show help message"
complete -c soapdump -s V -l version -d "Show version"
complete -c soapdump -s s -l summary -d "Show summary statistics only"
complete -c soapdump -s r -l raw -d "Output raw structured data"
complete -c soapdump -s f -l format -x -a "raw csv json" -d "Record format"
complete -c soapdump -s c -l config -r -F -d "Config file"
complete -c soapdump -s d -l debug -d "Enable debug logging"
complete -c soapdump -l generate-bash-completion -d "Generate Bash completion script"
complete -c soapdump -l generate-zsh-completion -d "Generate Zsh completion script"
complete -c soapdump -l generate-fish-completion -d "Generate Fish completion script"
complete -c soapdump -l man -d "Generate man page"
complete -c soapdump -a "(__fish_complete_suffix .log)" -d "Log file"
"#;

/// Completion script for `shell`.
pub fn completion_script(shell: Shell) -> &'static str {
    match shell {
        Shell::Bash => BASH_COMPLETION,
        Shell::Zsh => ZSH_COMPLETION,
        Shell::Fish => FISH_COMPLETION,
    }
}

/// Field reference block used by `--help` and the man page.
pub fn field_descriptions() -> String {
    let mut out = String::new();
    for spec in SCHEMA {
        let _ = writeln!(out, "    {:<12} - {}", spec.column, spec.description);
    }
    out
}

/// The manual page in troff format.
pub fn man_page() -> String {
    let header = column_names().collect::<Vec<_>>().join("|");
    let mut fields = String::new();
    for spec in SCHEMA {
        let _ = write!(fields, ".TP\n.B {}\n{}\n", spec.column, spec.description);
    }

    format!(
        r#".TH SOAPDUMP 1 "" "{name} {version}" "User Commands"
.SH NAME
{name} \- parse PayPal SOAP transaction logs
.SH SYNOPSIS
.B {name}
[\fIOPTIONS\fR] \fIlogfile\fR
.SH DESCRIPTION
.B {name}
reads a log file containing PayPal SOAP API request and response payloads
and prints one pipe-delimited record per transaction, suitable for further
processing with standard Unix tools.

Requests and responses are paired by their order in the log: the first
request with the first response, and so on.
.SH OPTIONS
.TP
.BR \-h ", " \-\-help
Display help information and exit
.TP
.BR \-V ", " \-\-version
Display version information and exit
.TP
.BR \-s ", " \-\-summary
Display summary statistics instead of transaction records
.TP
.BR \-r ", " \-\-raw
Output transaction records (default behavior)
.TP
.BR \-f ", " \-\-format " " \fIraw|csv|json\fR
Record format when not in summary mode (default raw)
.TP
.BR \-c ", " \-\-config " " \fIFILE\fR
Read settings from a TOML configuration file
.TP
.BR \-d ", " \-\-debug
Write debug diagnostics to standard error
.TP
.BR \-\-generate-bash-completion
Output bash shell completion script
.TP
.BR \-\-generate-zsh-completion
Output zsh shell completion script
.TP
.BR \-\-generate-fish-completion
Output fish shell completion script
.TP
.BR \-\-man
Output this manual page in troff format
.SH OUTPUT FORMAT
Transactions are printed one per line with pipe-separated fields:

{header}

Fields are empty when not present in the source data.
.SH FIELDS
{fields}.SH EXAMPLES
Show only successful transactions:
.RS
.B {name} paypal.log | grep '|Success|'
.RE

Count transactions by state:
.RS
.B {name} paypal.log | cut -d'|' -f8 | sort | uniq -c | sort -rn
.RE

Display summary statistics:
.RS
.B {name} --summary paypal.log
.RE
.SH EXIT STATUS
0 on success, 1 when no log file is given, the file cannot be read, or an
option is not recognised.
"#,
        name = constants::APP_NAME,
        version = constants::APP_VERSION,
    )
}
