use web_sys::HtmlMediaElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VideoSectionProps {
    pub src: AttrValue,
    pub eyebrow: AttrValue,
    pub title: AttrValue,
    pub highlight: AttrValue,
}

/// Full width video behind a play overlay. The overlay comes back whenever
/// the video pauses.
#[function_component(VideoSection)]
pub fn video_section(props: &VideoSectionProps) -> Html {
    let video_ref = use_node_ref();
    let is_playing = use_state(|| false);

    let on_play_click = {
        let video_ref = video_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(video) = video_ref.cast::<HtmlMediaElement>() {
                if video.play().is_err() {
                    log::warn!("video refused to start");
                }
            }
        })
    };

    let on_play = {
        let is_playing = is_playing.clone();
        Callback::from(move |_: Event| is_playing.set(true))
    };

    let on_pause = {
        let is_playing = is_playing.clone();
        Callback::from(move |_: Event| is_playing.set(false))
    };

    html! {
        <section class="video-section">
            <video
                ref={video_ref}
                src={props.src.clone()}
                controls={*is_playing}
                onplay={on_play}
                onpause={on_pause}
                playsinline=true
            />
            {
                if !*is_playing {
                    html! {
                        <div class="video-overlay">
                            <div class="video-overlay-text">
                                <span class="video-eyebrow">{&props.eyebrow}</span>
                                <h1>{&props.title}{" "}<span class="gold-text">{&props.highlight}</span></h1>
                            </div>
                            <button class="video-play" onclick={on_play_click}>
                                <span class="video-play-pulse"></span>
                                <span class="video-play-icon">{"▶"}</span>
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .video-section {
                    position: relative;
                    width: 100%;
                    height: 80vh;
                    background: #0B2E33;
                    overflow: hidden;
                    border-radius: 3rem 3rem 0 0;
                    margin-top: 5rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .video-section video {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .video-overlay {
                    position: absolute;
                    inset: 0;
                    z-index: 2;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    background: linear-gradient(to bottom, rgba(11, 46, 51, 0.6), rgba(11, 46, 51, 0.4), rgba(11, 46, 51, 0.8));
                    backdrop-filter: blur(2px);
                    animation: video-fade 0.8s ease-in-out both;
                }
                .video-overlay-text {
                    text-align: center;
                    padding: 0 1rem;
                    margin-bottom: 3rem;
                    max-width: 56rem;
                }
                .video-eyebrow {
                    display: inline-block;
                    padding: 0.25rem 0.75rem;
                    border: 1px solid rgba(184, 227, 233, 0.3);
                    border-radius: 999px;
                    color: #B8E3E9;
                    font-size: 0.875rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    margin-bottom: 1.5rem;
                }
                .video-overlay-text h1 {
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    font-weight: 700;
                    color: #fff;
                }
                .video-play {
                    position: relative;
                    width: 6rem;
                    height: 6rem;
                    border: none;
                    border-radius: 50%;
                    background: #bf953f;
                    box-shadow: 0 0 50px rgba(191, 149, 63, 0.3);
                    cursor: pointer;
                    transition: transform 0.2s ease;
                }
                .video-play:hover {
                    transform: scale(1.1);
                }
                .video-play-pulse {
                    position: absolute;
                    inset: 0;
                    border-radius: 50%;
                    background: #bf953f;
                    animation: video-pulse 2s infinite;
                }
                .video-play-icon {
                    position: relative;
                    font-size: 2.25rem;
                    color: #0B2E33;
                }
                @keyframes video-pulse {
                    from { transform: scale(1); opacity: 0.4; }
                    to { transform: scale(1.4); opacity: 0; }
                }
                @keyframes video-fade {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                "#}
            </style>
        </section>
    }
}
