//! Static copy shown in the reel

/// A coding agent the installer detects, with its skills directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Agent {
    pub name: &'static str,
    pub path: &'static str,
}

/// A skill category offered by the installer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub skills: u32,
    pub examples: &'static str,
}

pub const AGENTS: &[Agent] = &[
    Agent { name: "Claude Code", path: "~/.claude/skills" },
    Agent { name: "Cursor", path: "~/.cursor/skills" },
    Agent { name: "Windsurf", path: "~/.codeium/windsurf/skills" },
    Agent { name: "Gemini CLI", path: "~/.gemini/skills" },
    Agent { name: "Kilo Code", path: "~/.kilocode/skills" },
];

pub const CATEGORIES: &[Category] = &[
    Category { name: "Post-Training", skills: 8, examples: "GRPO, verl, slime, miles" },
    Category { name: "Fine-Tuning", skills: 5, examples: "Axolotl, Unsloth, PEFT" },
    Category { name: "Inference Serving", skills: 4, examples: "vLLM, SGLang, TensorRT" },
    Category { name: "Distributed Training", skills: 6, examples: "DeepSpeed, FSDP" },
    Category { name: "Optimization", skills: 6, examples: "Flash Attention, GPTQ, AWQ" },
    Category { name: "Evaluation", skills: 3, examples: "lm-eval-harness, Inspect AI" },
];

/// Size of the full catalog; the list above is only a sample of it
pub const TOTAL_SKILLS: u32 = 82;

pub const INSTALL_COMMAND: &str = "npx @orchestra-research/ai-research-skills";
pub const NPM_INSTALL: &str = "npm i @orchestra-research/ai-research-skills";
pub const REPOSITORY_URL: &str = "github.com/orchestra-research/ai-research-skills";

pub const TITLE: &str = "AI Research Skills";
pub const TAGLINE: &str = "Expert-level knowledge for AI research engineering";

pub const ORCHESTRA_ASCII: &str = r"
 ██████╗ ██████╗  ██████╗ ██╗  ██╗ ███████╗ ███████╗ ████████╗ ██████╗   █████╗
██╔═══██╗██╔══██╗██╔════╝ ██║  ██║ ██╔════╝ ██╔════╝ ╚══██╔══╝ ██╔══██╗ ██╔══██╗
██║   ██║██████╔╝██║      ███████║ █████╗   ███████╗    ██║    ██████╔╝ ███████║
██║   ██║██╔══██╗██║      ██╔══██║ ██╔══╝   ╚════██║    ██║    ██╔══██╗ ██╔══██║
╚██████╔╝██║  ██║╚██████╗ ██║  ██║ ███████╗ ███████║    ██║    ██║  ██║ ██║  ██║
 ╚═════╝ ╚═╝  ╚═╝ ╚═════╝ ╚═╝  ╚═╝ ╚══════╝ ╚══════╝    ╚═╝    ╚═╝  ╚═╝ ╚═╝  ╚═╝
";
