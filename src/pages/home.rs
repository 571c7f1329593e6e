use yew::prelude::*;

use crate::components::{
    contact::ContactForm,
    greeting::GreetingBanner,
    keyboard::use_keyboard_paging,
    nav::Nav,
    schedule::ScheduleTabs,
    scroll_top::ScrollTopButton,
    stats::StatsSection,
    video::{FacilityGrid, VideoShowcase},
};
use crate::content::{FACILITIES, SCHEDULES, SECTIONS, STATS, VIDEOS};

#[function_component(Home)]
pub fn home() -> Html {
    use_keyboard_paging(SECTIONS);

    html! {
        <>
            <Nav />

            <main class="page">
                <section id="home" class="section home-section">
                    <div class="section-container">
                        <h1 class="hero-title">{"NYUAD Fitness Center"}</h1>
                        <p class="hero-subtitle">
                            {"Train, swim and recharge, all in one place on campus."}
                        </p>
                        <GreetingBanner />
                        <VideoShowcase videos={VIDEOS} />
                    </div>
                </section>

                <section id="about" class="section about-section">
                    <div class="section-container">
                        <h2 class="section-title">{"About Us"}</h2>
                        <p>
                            {"Open to students, faculty and staff. Our coaches are on the floor every day to help you get started or push further."}
                        </p>
                        <StatsSection stats={STATS} />
                    </div>
                </section>

                <section id="facilities" class="section facilities-section">
                    <div class="section-container">
                        <h2 class="section-title">{"Facilities"}</h2>
                        <FacilityGrid facilities={FACILITIES} />
                    </div>
                </section>

                <section id="timings" class="section timings-section">
                    <div class="section-container">
                        <h2 class="section-title">{"Timings"}</h2>
                        <ScheduleTabs schedules={SCHEDULES} />
                    </div>
                </section>

                <section id="contact" class="section contact-section">
                    <div class="section-container">
                        <h2 class="section-title">{"Contact Us"}</h2>
                        <ContactForm />
                    </div>
                </section>
            </main>

            <ScrollTopButton />
        </>
    }
}
