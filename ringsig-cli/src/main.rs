use std::io::Read;
use std::{env, fs, io};

use serde::{Deserialize, Serialize};

/// One author and the keys published under their name.
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
struct Author {
    platform: String,
    username: String,
    keys: Vec<String>,
}

/// The signed-document envelope: message, accountable authors, proof.
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
struct Document {
    message: String,
    authors: Vec<Author>,
    #[serde(skip_serializing_if = "Option::is_none")]
    proof: Option<String>,
}

impl Document {
    /// Flatten the authors' key lists into the ring: author order, then
    /// key order within each author. The same flattening must be used
    /// when proving and when verifying.
    fn ring(&self) -> Vec<String> {
        self.authors
            .iter()
            .flat_map(|author| author.keys.iter().cloned())
            .collect()
    }
}

fn usage() -> Result<(), String> {
    let name = env::args().next().unwrap_or_else(|| "ringsig-cli".into());
    eprintln!("Usage: {} prove <json file> [secret key file]", name);
    eprintln!("Usage: {} verify <json file>", name);
    eprintln!();
    eprintln!("Here <json file> is a document with the fields `message`, `authors`");
    eprintln!("(a list of {{platform, username, keys}} objects), and, for");
    eprintln!("verification, `proof`. If the filename is `-` then standard input");
    eprintln!("is read.");
    eprintln!();
    eprintln!("If <secret key file> is provided it is used as the signing key.");
    eprintln!("Otherwise, when proving, every file in ~/.ssh is tried in turn.");
    Err("invalid command line arguments".into())
}

fn read_document(path: &str) -> Result<Document, String> {
    let reader: Box<dyn Read> = if path == "-" {
        Box::new(io::stdin())
    } else {
        Box::new(fs::File::open(path).map_err(|e| format!("opening {}: {}", path, e))?)
    };
    serde_json::from_reader(reader).map_err(|e| format!("parsing document: {}", e))
}

/// Try every file in ~/.ssh for something that parses as an unencrypted
/// ed25519 key.
fn find_ssh_key() -> Result<String, String> {
    let mut dir = home::home_dir()
        .ok_or("unknown home directory; please pass a secret key file")?;
    dir.push(".ssh");
    for entry in fs::read_dir(&dir).map_err(|e| format!("reading {}: {}", dir.display(), e))? {
        let entry = entry.map_err(|e| e.to_string())?;
        if let Ok(text) = fs::read_to_string(entry.path()) {
            if ringsig::is_secret_key(&text) {
                return Ok(text);
            }
        }
    }
    Err("no unencrypted ed25519 key found in ~/.ssh".into())
}

fn main() -> Result<(), String> {
    let args: Vec<_> = env::args().collect();
    if args.len() < 2 {
        usage()?;
    }
    match &args[1][..] {
        "prove" if args.len() == 3 || args.len() == 4 => {}
        "verify" if args.len() == 3 => {}
        _ => usage()?,
    }

    let mut document = read_document(&args[2])?;
    let ring = document.ring();

    if args[1] == "prove" {
        let secret = if args.len() == 4 {
            fs::read_to_string(&args[3])
                .map_err(|e| format!("reading secret key file {}: {}", args[3], e))?
        } else {
            find_ssh_key()?
        };

        let proof = ringsig::prove(&ring, document.message.as_bytes(), &secret)
            .map_err(|e| e.to_string())?;
        document.proof = Some(proof);
        println!(
            "{}",
            serde_json::to_string(&document).map_err(|e| e.to_string())?
        );
    }

    if args[1] == "verify" {
        let proof = document.proof.ok_or("missing proof in document")?;
        ringsig::verify(&proof, &ring, document.message.as_bytes())
            .map_err(|e| e.to_string())?;
        println!("{}", document.message);
        println!("-----END OF MESSAGE-----");
        println!("SUCCESSFULLY VERIFIED PROOF with one of");
        for key in &ring {
            println!("{}", key);
        }
    }

    Ok(())
}
