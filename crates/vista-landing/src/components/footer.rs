use leptos::prelude::*;

/// Contact details, quick links and copyright.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-black text-white py-12" data-testid="footer">
            <div class="max-w-7xl mx-auto px-6">
                <div class="grid md:grid-cols-3 gap-8 pb-10 border-b border-white/10">
                    <div>
                        <h4 class="font-semibold mb-2">"Call Us"</h4>
                        <a href="tel:+919555261111" class="text-gray-300 hover:text-white">"(+91) 9555 26 1111"</a>
                    </div>
                    <div>
                        <h4 class="font-semibold mb-2">"Write to Us"</h4>
                        <a href="mailto:info@agrocorp.co.in" class="text-gray-300 hover:text-white">"info@agrocorp.co.in"</a>
                    </div>
                    <div>
                        <h4 class="font-semibold mb-2">"Visit Us"</h4>
                        <p class="text-gray-300">
                            "1st Floor, 90, Bellary Road," <br />
                            "Byatarayanapura (Bangalore) Urban," <br />
                            "Karnataka, 560092"
                        </p>
                    </div>
                </div>

                <div class="flex flex-col md:flex-row items-center justify-between gap-8 py-10">
                    <img src="/assets/agrocorp-footer-logo.png" alt="Agrocorp - real estate. reimagined." class="h-40 w-auto" />
                    <nav class="flex gap-6 text-gray-300">
                        <a href="#investment-strategy" class="hover:text-white">"Why a Farmhouse"</a>
                        <a href="#current-project" class="hover:text-white">"Central Vista Farms"</a>
                        <a href="#contact-form" class="hover:text-white">"Contact"</a>
                    </nav>
                </div>

                <p class="text-center text-gray-500 text-sm">"© Agrocorp Landbase Pvt. Ltd, All Right Reserved."</p>
            </div>
        </footer>
    }
}
