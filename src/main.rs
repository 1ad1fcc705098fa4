use std::env;

use anyhow::Context;
use podcastai::{
    trace::init_tracing_subscriber, ClientConfig, GenerationOptions, PodcastClient, PodcastLength,
    PodcastSource, Speaker, TtsRequest,
};

const SAMPLE_CUSTOM_VOICE: &str =
    "https://res.cloudinary.com/dmtomxyvm/video/upload/v1731889883/voices/exdawrxdkcgonrxcc2ij.wav";

fn tts_scenarios() -> Vec<(&'static str, TtsRequest)> {
    vec![
        (
            "Basic Sara voice",
            TtsRequest::new("Hola, esta es una prueba básica con la voz de Sara.")
                .speaker(Speaker::SARA),
        ),
        (
            "Basic Robert voice",
            TtsRequest::new("Hola, esta es una prueba básica con la voz de Robert.")
                .speaker(Speaker::ROBERT),
        ),
        (
            "Custom voice for Sara",
            TtsRequest::new("Esta es una prueba con voz personalizada para Sara.")
                .speaker(Speaker::SARA)
                .custom_voice(SAMPLE_CUSTOM_VOICE),
        ),
        (
            "Custom voice for Robert",
            TtsRequest::new("Esta es una prueba con voz personalizada para Robert.")
                .speaker(Speaker::ROBERT)
                .custom_voice(SAMPLE_CUSTOM_VOICE),
        ),
    ]
}

async fn run_tts_demo(client: &PodcastClient) {
    for (name, request) in tts_scenarios() {
        println!("\nRunning: {}", name);
        println!("{}", "-".repeat(50));

        match client.synthesize(&request).await {
            Ok(result) => {
                println!("  Audio URL: {}", result.audio_url);
                println!("  Audio ID: {}", result.audio_id);
                println!("  Metadata: {}", result.metadata);
            }
            Err(err) => println!("Error: {}", err),
        }
    }
}

async fn run_podcast_from_url(client: &PodcastClient, url: &str) -> anyhow::Result<()> {
    let options = GenerationOptions::default()
        .podcast_length(PodcastLength::EXTENDED)
        .question("Explica esto de manera simple");

    let result = client
        .generate_podcast(&PodcastSource::Url(url.to_string()), &options)
        .await
        .context("Podcast generation failed")?;

    println!("\nPodcast URL: {}", result.podcast_url);
    println!("\nTranscript:");
    for line in result.transcript {
        println!("{}: {}", line.speaker, line.text);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing_subscriber();

    let config = ClientConfig::load().context("Cannot load client configuration")?;
    let client = PodcastClient::from_config(config)?;

    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str).unwrap_or("health") {
        "health" => {
            let health = client.check_health().await?;
            println!("{}", serde_json::to_string_pretty(&health)?);
        }
        "voices" => {
            let voices = client.list_voices().await?;
            println!("{}", serde_json::to_string_pretty(&voices)?);
        }
        "tts-demo" => run_tts_demo(&client).await,
        "podcast-url" => {
            let url = args
                .get(1)
                .context("usage: podcastai podcast-url <url>")?;
            run_podcast_from_url(&client, url).await?;
        }
        other => anyhow::bail!(
            "Unknown command: {} (expected health, voices, tts-demo or podcast-url)",
            other
        ),
    }

    Ok(())
}
